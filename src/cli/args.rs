//! CLI argument definitions using clap
//!
//! Commands:
//! - hdxp calc <encounter> [--save]
//! - hdxp history
//! - hdxp show <id>
//! - hdxp delete <id>
//! - hdxp clear

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// hdxp - experience awards from hit dice
#[derive(Parser, Debug)]
#[command(name = "hdxp")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Calculate awards for an encounter file (.ron or .json)
    Calc {
        /// Encounter file
        encounter: PathBuf,

        /// Keep the calculation in the history
        #[arg(long)]
        save: bool,
    },

    /// List saved calculations
    History,

    /// Show a saved calculation as it was stored
    Show {
        id: String,
    },

    /// Delete a saved calculation
    Delete {
        id: String,
    },

    /// Delete every saved calculation
    Clear,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_calc() {
        let cli = Cli::try_parse_from(["hdxp", "calc", "party.ron", "--save"]).unwrap();
        match cli.command {
            Command::Calc { encounter, save } => {
                assert_eq!(encounter, PathBuf::from("party.ron"));
                assert!(save);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_global_config() {
        let cli = Cli::try_parse_from(["hdxp", "history", "--config", "s.ron"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("s.ron")));
    }
}
