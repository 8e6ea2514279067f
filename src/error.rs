//! Error types
//!
//! One enum per concern: record/engine validation, the key-value store,
//! encounter files, and the session layer that ties them together.

use thiserror::Error;

/// Which roster of a calculation a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Roster {
    Characters,
    MonsterGroups,
}

impl std::fmt::Display for Roster {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Roster::Characters => write!(f, "character"),
            Roster::MonsterGroups => write!(f, "monster group"),
        }
    }
}

/// Invalid calculation input
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("at least one character is required")]
    NoCharacters,

    #[error("at least one monster group is required")]
    NoMonsterGroups,

    #[error("{roster} id must be at least 1")]
    InvalidId { roster: Roster },

    #[error("{roster} {id}: hit dice must be between 1 and {}", crate::party::MAX_HIT_DICE)]
    InvalidHitDice { roster: Roster, id: u32 },

    #[error("{roster} {id}: modifier must be within ±{}", crate::party::MAX_MODIFIER)]
    ModifierOutOfRange { roster: Roster, id: u32 },

    #[error("{roster} {id}: effective hit dice must be positive (got {effective})")]
    NonPositiveEffectiveHitDice { roster: Roster, id: u32, effective: f64 },

    #[error("monster group {id}: count must be between 1 and {}", crate::party::MAX_COUNT)]
    InvalidCount { id: u32 },

    #[error("duplicate {roster} id {id}")]
    DuplicateId { roster: Roster, id: u32 },
}

/// Key-value store failure
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Encounter file failure
#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse RON: {0}")]
    Ron(#[from] ron::error::SpannedError),

    #[error("failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported encounter file extension: {0:?}")]
    UnsupportedFormat(String),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Session operation failure
#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("nothing to save: no calculation has been run")]
    NoResult,

    #[error("no {roster} with id {id}")]
    NotFound { roster: Roster, id: u32 },
}
