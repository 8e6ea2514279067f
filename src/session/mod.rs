//! Calculator session

pub mod state;

pub use state::Session;
