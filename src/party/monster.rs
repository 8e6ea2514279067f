//! Monster groups
//!
//! A group is a number of identical monsters fought together.

use serde::{Deserialize, Serialize};

use super::check_record;
use crate::error::{Roster, ValidationError};
use crate::xp::effective_hit_dice;

/// Identical monsters counted together
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonsterGroup {
    id: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    hit_dice: u32,
    #[serde(default)]
    modifier: i32,
    count: u32,
}

impl MonsterGroup {
    /// Create a validated monster group
    pub fn new(id: u32, hit_dice: u32, modifier: i32, count: u32) -> Result<Self, ValidationError> {
        let group = Self { id, name: None, hit_dice, modifier, count };
        group.validate()?;
        Ok(group)
    }

    /// Attach a display name (blank names are dropped)
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.name = if name.trim().is_empty() { None } else { Some(name) };
        self
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("Monster group {}", self.id),
        }
    }

    pub fn hit_dice(&self) -> u32 {
        self.hit_dice
    }

    pub fn modifier(&self) -> i32 {
        self.modifier
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Effective hit dice of one monster in the group
    pub fn effective_hit_dice(&self) -> f64 {
        effective_hit_dice(self.hit_dice, self.modifier)
    }

    /// Effective hit dice of the whole group
    pub fn total_effective_hit_dice(&self) -> f64 {
        self.effective_hit_dice() * self.count as f64
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        check_record(Roster::MonsterGroups, self.id, self.hit_dice, self.modifier)?;
        if self.count == 0 || self.count > super::MAX_COUNT {
            return Err(ValidationError::InvalidCount { id: self.id });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_totals() {
        let g = MonsterGroup::new(1, 2, 1, 4).unwrap().with_name("Goblins");
        assert_eq!(g.effective_hit_dice(), 2.25);
        assert_eq!(g.total_effective_hit_dice(), 9.0);
        assert_eq!(g.display_name(), "Goblins");
    }

    #[test]
    fn test_rejects_empty_group() {
        assert_eq!(MonsterGroup::new(2, 3, 0, 0), Err(ValidationError::InvalidCount { id: 2 }));
    }

    #[test]
    fn test_rejects_oversized_group() {
        assert_eq!(
            MonsterGroup::new(1, u32::MAX, 0, 1),
            Err(ValidationError::InvalidHitDice { roster: Roster::MonsterGroups, id: 1 })
        );
        assert_eq!(MonsterGroup::new(1, 4, 0, u32::MAX), Err(ValidationError::InvalidCount { id: 1 }));
    }

    #[test]
    fn test_deserialized_group_is_checked() {
        let g: MonsterGroup =
            serde_json::from_str(r#"{"id":1,"hitDice":0,"modifier":0,"count":1}"#).unwrap();
        assert!(g.validate().is_err());
    }
}
