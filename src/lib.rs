//! hdxp - experience awards from hit dice
//!
//! Converts a tabletop encounter (party hit dice against monster groups)
//! into per-character experience, and keeps a history of past calculations.

pub mod cli;
pub mod config;
pub mod data;
pub mod error;
pub mod party;
pub mod report;
pub mod save;
pub mod session;
pub mod xp;

// Re-export commonly used types
pub use error::{DataError, Roster, SessionError, StoreError, ValidationError};
pub use party::{Character, MonsterGroup};
pub use save::{CalculationHistory, SavedCalculation};
pub use session::Session;
pub use xp::{adjustment_factor, compute_result, effective_hit_dice, CalculationResult};
