//! hdxp - Entry Point
//!
//! Loads settings, sets up logging, and runs one command against the saved
//! calculation history.

use anyhow::Result;

use hdxp::cli::{self, Cli};
use hdxp::config::Settings;
use hdxp::save::{CalculationHistory, FileStore};

fn main() -> Result<()> {
    let args = Cli::parse_args();

    let settings = match &args.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(settings.log_level.as_str())
    )
    .init();

    log::info!("Starting hdxp v{}", env!("CARGO_PKG_VERSION"));

    let store = FileStore::new(settings.resolved_data_dir());
    log::debug!("History file: {:?}", store.path_for(&settings.storage_key));
    let mut history = CalculationHistory::with_key(store, settings.storage_key.clone());

    let result = cli::run(args.command, &mut history);

    match result {
        Ok(output) => {
            print!("{}", output);
            Ok(())
        }
        Err(e) => {
            log::error!("Command failed: {:#}", e);
            Err(e)
        }
    }
}
