//! Calculation output records

use serde::{Deserialize, Serialize};

/// One monster group's share of a character's award
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterContribution {
    pub monster_group_id: u32,
    /// Unadjusted share: group XP split evenly across the party
    pub base_share: f64,
    /// Adjustment applied for this character/group pair
    pub adjustment_factor: f64,
    /// `floor(base_share * adjustment_factor)`
    pub adjusted_xp: u64,
}

/// Per-character award breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CharacterXp {
    pub character_id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub effective_hit_dice: f64,
    pub contributions: Vec<MonsterContribution>,
    /// Undistributed XP handed to this character (lowest level only)
    #[serde(default)]
    pub remainder_bonus: u64,
    /// Final award: contributions plus remainder bonus
    pub adjusted_xp: u64,
}

/// Aggregate and per-character outcome of one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResult {
    pub total_party_hit_dice: f64,
    pub total_monster_hit_dice: f64,
    pub total_xp: u64,
    /// `total_xp / party size`, unrounded; reporting only
    pub xp_per_character: f64,
    pub average_party_level: f64,
    /// Adjustment of the average party level against the average monster
    pub adjustment_factor: f64,
    #[serde(default)]
    pub characters: Vec<CharacterXp>,
}

impl CalculationResult {
    /// Sum of all final awards
    pub fn distributed_xp(&self) -> u64 {
        self.characters.iter().map(|c| c.adjusted_xp).sum()
    }

    /// Breakdown for one character
    pub fn character(&self, id: u32) -> Option<&CharacterXp> {
        self.characters.iter().find(|c| c.character_id == id)
    }
}
