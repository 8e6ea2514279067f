//! XP engine
//!
//! Turns a party and the monster groups it defeated into experience awards.
//! Every pair (character, group) is discounted independently; whatever the
//! discounting and per-pair flooring leaves over goes to the weakest
//! character, so the awards always add up to the encounter total.

use log::debug;

use super::formula::{adjustment_factor, BASE_XP_PER_HIT_DIE};
use super::result::{CalculationResult, CharacterXp, MonsterContribution};
use crate::error::{Roster, ValidationError};
use crate::party::{check_unique_ids, Character, MonsterGroup};

/// Compute the full experience breakdown for an encounter
///
/// Input is checked completely before any arithmetic; on error nothing is
/// computed.
pub fn compute_result(
    characters: &[Character],
    monster_groups: &[MonsterGroup],
) -> Result<CalculationResult, ValidationError> {
    validate_input(characters, monster_groups)?;

    let party_size = characters.len() as f64;
    let total_party_hit_dice: f64 = characters.iter().map(Character::effective_hit_dice).sum();
    let average_party_level = total_party_hit_dice / party_size;

    let total_monster_hit_dice: f64 = monster_groups
        .iter()
        .map(MonsterGroup::total_effective_hit_dice)
        .sum();
    let monster_count: u64 = monster_groups.iter().map(|g| g.count() as u64).sum();
    let average_monster_level = total_monster_hit_dice / monster_count as f64;

    // Quarter hit dice times 100 is always whole
    let total_xp = (total_monster_hit_dice * BASE_XP_PER_HIT_DIE as f64).round() as u64;

    let mut breakdown: Vec<CharacterXp> = characters
        .iter()
        .map(|character| character_share(character, monster_groups, party_size))
        .collect();

    let distributed: u64 = breakdown.iter().map(|c| c.adjusted_xp).sum();
    let remainder = total_xp.saturating_sub(distributed);
    let lowest = lowest_level_index(characters);
    breakdown[lowest].remainder_bonus = remainder;
    breakdown[lowest].adjusted_xp += remainder;

    debug!(
        "Encounter: {} characters, {} groups, {} XP ({} remainder to character {})",
        characters.len(),
        monster_groups.len(),
        total_xp,
        remainder,
        breakdown[lowest].character_id
    );

    Ok(CalculationResult {
        total_party_hit_dice,
        total_monster_hit_dice,
        total_xp,
        xp_per_character: total_xp as f64 / party_size,
        average_party_level,
        adjustment_factor: adjustment_factor(average_party_level, average_monster_level),
        characters: breakdown,
    })
}

fn validate_input(characters: &[Character], monster_groups: &[MonsterGroup]) -> Result<(), ValidationError> {
    if characters.is_empty() {
        return Err(ValidationError::NoCharacters);
    }
    if monster_groups.is_empty() {
        return Err(ValidationError::NoMonsterGroups);
    }
    for character in characters {
        character.validate()?;
    }
    for group in monster_groups {
        group.validate()?;
    }
    check_unique_ids(Roster::Characters, characters.iter().map(Character::id))?;
    check_unique_ids(Roster::MonsterGroups, monster_groups.iter().map(MonsterGroup::id))?;
    Ok(())
}

/// One character's adjusted contributions, before any remainder
fn character_share(character: &Character, monster_groups: &[MonsterGroup], party_size: f64) -> CharacterXp {
    let level = character.effective_hit_dice();

    let contributions: Vec<MonsterContribution> = monster_groups
        .iter()
        .map(|group| {
            let group_xp = group.total_effective_hit_dice() * BASE_XP_PER_HIT_DIE as f64;
            let base_share = group_xp / party_size;
            let factor = adjustment_factor(level, group.effective_hit_dice());
            MonsterContribution {
                monster_group_id: group.id(),
                base_share,
                adjustment_factor: factor,
                adjusted_xp: (base_share * factor).floor() as u64,
            }
        })
        .collect();

    CharacterXp {
        character_id: character.id(),
        name: character.name().map(str::to_string),
        effective_hit_dice: level,
        adjusted_xp: contributions.iter().map(|c| c.adjusted_xp).sum(),
        contributions,
        remainder_bonus: 0,
    }
}

/// Index of the lowest effective hit dice; first one wins ties
fn lowest_level_index(characters: &[Character]) -> usize {
    let mut lowest = 0;
    for (i, character) in characters.iter().enumerate().skip(1) {
        if character.effective_hit_dice() < characters[lowest].effective_hit_dice() {
            lowest = i;
        }
    }
    lowest
}
