//! Experience calculation
//!
//! Effective hit dice, the level adjustment, and the encounter engine.

pub mod engine;
pub mod formula;
pub mod result;

pub use engine::compute_result;
pub use formula::{adjustment_factor, effective_hit_dice, BASE_XP_PER_HIT_DIE, MODIFIER_WEIGHT};
pub use result::{CalculationResult, CharacterXp, MonsterContribution};
