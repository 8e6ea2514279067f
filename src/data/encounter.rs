//! Encounter files
//!
//! An encounter lists the party and the monster groups it faced. Files are
//! RON or JSON, picked by extension.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DataError;
use crate::party::{Character, MonsterGroup};

/// Party and opposition read from disk
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Encounter {
    #[serde(default)]
    pub characters: Vec<Character>,
    #[serde(default)]
    pub monsters: Vec<MonsterGroup>,
}

impl Encounter {
    /// Check every record; roster-level checks are left to the engine
    pub fn validate(&self) -> Result<(), DataError> {
        for character in &self.characters {
            character.validate()?;
        }
        for group in &self.monsters {
            group.validate()?;
        }
        Ok(())
    }

    pub fn from_ron(content: &str) -> Result<Self, DataError> {
        let encounter: Encounter = ron::from_str(content)?;
        encounter.validate()?;
        Ok(encounter)
    }

    pub fn from_json(content: &str) -> Result<Self, DataError> {
        let encounter: Encounter = serde_json::from_str(content)?;
        encounter.validate()?;
        Ok(encounter)
    }
}

/// Load an encounter from a `.ron` or `.json` file
pub fn load_encounter(path: &Path) -> Result<Encounter, DataError> {
    let content = fs::read_to_string(path).map_err(|source| DataError::Read {
        path: path.display().to_string(),
        source,
    })?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();

    let encounter = match extension.as_str() {
        "ron" => Encounter::from_ron(&content)?,
        "json" => Encounter::from_json(&content)?,
        other => return Err(DataError::UnsupportedFormat(other.to_string())),
    };

    log::info!(
        "Loaded encounter from {:?}: {} characters, {} monster groups",
        path,
        encounter.characters.len(),
        encounter.monsters.len()
    );
    Ok(encounter)
}

#[cfg(test)]
mod tests {
    use super::*;

    const RON_ENCOUNTER: &str = r#"(
        characters: [
            (id: 1, name: Some("Brakka"), hitDice: 8, modifier: 0),
            (id: 2, hitDice: 2),
        ],
        monsters: [
            (id: 1, name: Some("Goblins"), hitDice: 2, modifier: 0, count: 4),
        ],
    )"#;

    #[test]
    fn test_parse_ron() {
        let encounter = Encounter::from_ron(RON_ENCOUNTER).unwrap();
        assert_eq!(encounter.characters.len(), 2);
        assert_eq!(encounter.characters[0].name(), Some("Brakka"));
        assert_eq!(encounter.characters[1].modifier(), 0);
        assert_eq!(encounter.monsters[0].count(), 4);
    }

    #[test]
    fn test_parse_json() {
        let json = r#"{
            "characters": [{"id": 1, "hitDice": 4, "modifier": -1}],
            "monsters": [{"id": 1, "name": "Ogre", "hitDice": 4, "modifier": 1, "count": 1}]
        }"#;
        let encounter = Encounter::from_json(json).unwrap();
        assert_eq!(encounter.characters[0].effective_hit_dice(), 3.75);
        assert_eq!(encounter.monsters[0].display_name(), "Ogre");
    }

    #[test]
    fn test_invalid_record_rejected() {
        let json = r#"{"characters": [], "monsters": [{"id": 1, "hitDice": 2, "count": 0}]}"#;
        assert!(matches!(Encounter::from_json(json), Err(DataError::Invalid(_))));
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("party.txt");
        fs::write(&path, "irrelevant").unwrap();
        assert!(matches!(load_encounter(&path), Err(DataError::UnsupportedFormat(_))));
    }
}
