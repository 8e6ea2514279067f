//! Command-line front end

pub mod args;
pub mod commands;

pub use args::{Cli, Command};
pub use commands::run;
