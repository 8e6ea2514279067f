//! Encounter participants
//!
//! Characters on one side, monster groups on the other. Both are immutable
//! value records checked on construction.

pub mod character;
pub mod monster;

pub use character::Character;
pub use monster::MonsterGroup;

use std::collections::HashSet;

use crate::error::{Roster, ValidationError};
use crate::xp::effective_hit_dice;

/// Largest accepted hit dice for a character or monster
pub const MAX_HIT_DICE: u32 = 10_000;

/// Largest accepted modifier magnitude
pub const MAX_MODIFIER: i32 = 40_000;

/// Largest accepted number of monsters in one group
pub const MAX_COUNT: u32 = 10_000;

/// Shared record checks for characters and monster groups
fn check_record(roster: Roster, id: u32, hit_dice: u32, modifier: i32) -> Result<(), ValidationError> {
    if id == 0 {
        return Err(ValidationError::InvalidId { roster });
    }
    if hit_dice == 0 || hit_dice > MAX_HIT_DICE {
        return Err(ValidationError::InvalidHitDice { roster, id });
    }
    if modifier.unsigned_abs() > MAX_MODIFIER.unsigned_abs() {
        return Err(ValidationError::ModifierOutOfRange { roster, id });
    }
    let effective = effective_hit_dice(hit_dice, modifier);
    if effective <= 0.0 {
        return Err(ValidationError::NonPositiveEffectiveHitDice { roster, id, effective });
    }
    Ok(())
}

/// Fail on the first id seen twice
pub(crate) fn check_unique_ids(
    roster: Roster,
    ids: impl IntoIterator<Item = u32>,
) -> Result<(), ValidationError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ValidationError::DuplicateId { roster, id });
        }
    }
    Ok(())
}

/// Smallest id not yet used, starting at 1
pub(crate) fn next_free_id(ids: impl IntoIterator<Item = u32>) -> u32 {
    let used: HashSet<u32> = ids.into_iter().collect();
    (1..).find(|id| !used.contains(id)).unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_ids() {
        assert!(check_unique_ids(Roster::Characters, [1, 2, 3]).is_ok());
        assert_eq!(
            check_unique_ids(Roster::MonsterGroups, [1, 2, 1]),
            Err(ValidationError::DuplicateId { roster: Roster::MonsterGroups, id: 1 })
        );
    }

    #[test]
    fn test_record_bounds() {
        assert!(check_record(Roster::Characters, 1, MAX_HIT_DICE, MAX_MODIFIER).is_ok());
        assert_eq!(
            check_record(Roster::Characters, 1, MAX_HIT_DICE + 1, 0),
            Err(ValidationError::InvalidHitDice { roster: Roster::Characters, id: 1 })
        );
        assert_eq!(
            check_record(Roster::MonsterGroups, 2, 5, i32::MIN),
            Err(ValidationError::ModifierOutOfRange { roster: Roster::MonsterGroups, id: 2 })
        );
    }

    #[test]
    fn test_next_free_id() {
        assert_eq!(next_free_id([]), 1);
        assert_eq!(next_free_id([1, 2, 3]), 4);
        assert_eq!(next_free_id([1, 3]), 2);
    }
}
