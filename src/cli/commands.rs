//! Command execution

use anyhow::{bail, Context, Result};

use super::args::Command;
use crate::data::load_encounter;
use crate::report::{render_history, render_result};
use crate::save::{CalculationHistory, KeyValueStore};
use crate::session::Session;

/// Run one command against a history, returning what to print
pub fn run<S: KeyValueStore>(command: Command, history: &mut CalculationHistory<S>) -> Result<String> {
    match command {
        Command::Calc { encounter, save } => {
            let loaded = load_encounter(&encounter)
                .with_context(|| format!("loading encounter {}", encounter.display()))?;
            let mut session = Session::with_rosters(loaded.characters, loaded.monsters);
            let result = session.calculate().context("calculating experience")?.clone();

            let mut out = render_result(&result, session.characters(), session.monsters());
            if save {
                let saved = session.save(history).context("saving calculation")?;
                out.push_str(&format!("\nSaved as {}\n", saved.id()));
            }
            Ok(out)
        }
        Command::History => Ok(render_history(&history.all())),
        Command::Show { id } => {
            let Some(saved) = history.find(&id) else {
                bail!("no saved calculation with id {}", id);
            };
            let mut out = format!("Saved {}\n\n", saved.created_at().format("%Y-%m-%d %H:%M:%S"));
            out.push_str(&render_result(saved.result(), saved.characters(), saved.monsters()));
            Ok(out)
        }
        Command::Delete { id } => {
            if !history.delete(&id).context("deleting calculation")? {
                bail!("no saved calculation with id {}", id);
            }
            Ok(format!("Deleted {}\n", id))
        }
        Command::Clear => {
            history.clear().context("clearing history")?;
            Ok("History cleared.\n".to_string())
        }
    }
}
