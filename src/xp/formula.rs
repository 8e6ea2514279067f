//! Hit dice and adjustment formulas
//!
//! The two scalar rules everything else is built on.

/// Fixed award per effective monster hit die
pub const BASE_XP_PER_HIT_DIE: u64 = 100;

/// Weight of one modifier point, in hit dice
pub const MODIFIER_WEIGHT: f64 = 0.25;

/// Effective hit dice: `hit_dice + modifier * 0.25`
///
/// Always a multiple of a quarter, so it is exact in an `f64`.
pub fn effective_hit_dice(hit_dice: u32, modifier: i32) -> f64 {
    hit_dice as f64 + modifier as f64 * MODIFIER_WEIGHT
}

/// Share of full experience a character earns against a monster
///
/// Full credit (1.0) when the monster is at or above the character's
/// effective level, otherwise the ratio `monster / character`. Continuous
/// and monotonic in `monster_level`; both inputs must be positive.
pub fn adjustment_factor(character_level: f64, monster_level: f64) -> f64 {
    if monster_level >= character_level {
        1.0
    } else {
        monster_level / character_level
    }
}
