//! Party members

use serde::{Deserialize, Serialize};

use super::check_record;
use crate::error::{Roster, ValidationError};
use crate::xp::effective_hit_dice;

/// A party member taking part in an encounter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    id: u32,
    /// Display name; older saved records may not carry one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
    hit_dice: u32,
    #[serde(default)]
    modifier: i32,
}

impl Character {
    /// Create a validated character
    pub fn new(id: u32, hit_dice: u32, modifier: i32) -> Result<Self, ValidationError> {
        let character = Self { id, name: None, hit_dice, modifier };
        character.validate()?;
        Ok(character)
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

    /// Name for display, falling back to the id
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("Character {}", self.id),
        }
    }

    pub fn hit_dice(&self) -> u32 {
        self.hit_dice
    }

    pub fn modifier(&self) -> i32 {
        self.modifier
    }

    pub fn effective_hit_dice(&self) -> f64 {
        effective_hit_dice(self.hit_dice, self.modifier)
    }

    /// Re-check invariants (records may come from deserialization)
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_record(Roster::Characters, self.id, self.hit_dice, self.modifier)
    }
}
