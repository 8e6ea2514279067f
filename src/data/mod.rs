//! Data loading
//!
//! Encounter definitions read from external RON or JSON files.

pub mod encounter;

pub use encounter::{load_encounter, Encounter};
