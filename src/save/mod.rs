//! Save/load system
//!
//! Key-value storage and the history of saved calculations.

pub mod history;
pub mod store;

pub use history::{CalculationHistory, SavedCalculation, DEFAULT_STORAGE_KEY};
pub use store::{default_data_dir, FileStore, KeyValueStore, MemoryStore};
