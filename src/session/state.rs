//! Calculator session state
//!
//! Holds the rosters being edited and the most recent result. Editing a
//! roster invalidates the result; loading a saved calculation replaces all
//! of it.

use crate::error::{Roster, SessionError};
use crate::party::{next_free_id, Character, MonsterGroup};
use crate::save::{CalculationHistory, KeyValueStore, SavedCalculation};
use crate::xp::{compute_result, CalculationResult};

/// Working state of one calculator session
#[derive(Debug, Clone, Default)]
pub struct Session {
    /// Party members, in input order
    characters: Vec<Character>,
    /// Monster groups, in input order
    monsters: Vec<MonsterGroup>,
    /// Result of the last calculation, if still current
    result: Option<CalculationResult>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing rosters
    pub fn with_rosters(characters: Vec<Character>, monsters: Vec<MonsterGroup>) -> Self {
        Self { characters, monsters, result: None }
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn monsters(&self) -> &[MonsterGroup] {
        &self.monsters
    }

    pub fn result(&self) -> Option<&CalculationResult> {
        self.result.as_ref()
    }

    /// Add a character under the next free id
    pub fn add_character(
        &mut self,
        hit_dice: u32,
        modifier: i32,
        name: Option<&str>,
    ) -> Result<&Character, SessionError> {
        let id = next_free_id(self.characters.iter().map(Character::id));
        let mut character = Character::new(id, hit_dice, modifier)?;
        if let Some(name) = name {
            character = character.with_name(name);
        }
        self.characters.push(character);
        self.result = None;
        Ok(&self.characters[self.characters.len() - 1])
    }

    /// Add a monster group under the next free id
    pub fn add_monster_group(
        &mut self,
        hit_dice: u32,
        modifier: i32,
        count: u32,
        name: Option<&str>,
    ) -> Result<&MonsterGroup, SessionError> {
        let id = next_free_id(self.monsters.iter().map(MonsterGroup::id));
        let mut group = MonsterGroup::new(id, hit_dice, modifier, count)?;
        if let Some(name) = name {
            group = group.with_name(name);
        }
        self.monsters.push(group);
        self.result = None;
        Ok(&self.monsters[self.monsters.len() - 1])
    }

    pub fn remove_character(&mut self, id: u32) -> Result<Character, SessionError> {
        let pos = self
            .characters
            .iter()
            .position(|c| c.id() == id)
            .ok_or(SessionError::NotFound { roster: Roster::Characters, id })?;
        self.result = None;
        Ok(self.characters.remove(pos))
    }

    pub fn remove_monster_group(&mut self, id: u32) -> Result<MonsterGroup, SessionError> {
        let pos = self
            .monsters
            .iter()
            .position(|g| g.id() == id)
            .ok_or(SessionError::NotFound { roster: Roster::MonsterGroups, id })?;
        self.result = None;
        Ok(self.monsters.remove(pos))
    }

    /// Run the engine over the current rosters
    pub fn calculate(&mut self) -> Result<&CalculationResult, SessionError> {
        let result = compute_result(&self.characters, &self.monsters)?;
        Ok(&*self.result.insert(result))
    }

    /// Freeze the current rosters and result into the history
    pub fn save<S: KeyValueStore>(
        &self,
        history: &mut CalculationHistory<S>,
    ) -> Result<SavedCalculation, SessionError> {
        let result = self.result.clone().ok_or(SessionError::NoResult)?;
        let snapshot = SavedCalculation::new(self.characters.clone(), self.monsters.clone(), result);
        Ok(history.append(snapshot)?)
    }

    /// Replace everything with a saved calculation, result included as stored
    pub fn load(&mut self, saved: SavedCalculation) {
        log::info!("Loading calculation {}", saved.id());
        let (characters, monsters, result) = saved.into_parts();
        self.characters = characters;
        self.monsters = monsters;
        self.result = Some(result);
    }

    /// Clear rosters and result
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;
    use crate::save::MemoryStore;

    fn ready_session() -> Session {
        let mut session = Session::new();
        session.add_character(8, 0, Some("Brakka")).unwrap();
        session.add_character(2, 0, None).unwrap();
        session.add_monster_group(2, 0, 4, Some("Goblins")).unwrap();
        session
    }

    #[test]
    fn test_ids_are_assigned() {
        let session = ready_session();
        let ids: Vec<u32> = session.characters().iter().map(Character::id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(session.monsters()[0].id(), 1);
    }

    #[test]
    fn test_removed_id_is_reused() {
        let mut session = ready_session();
        session.remove_character(1).unwrap();
        let added = session.add_character(3, 0, None).unwrap();
        assert_eq!(added.id(), 1);
    }

    #[test]
    fn test_calculate() {
        let mut session = ready_session();
        let result = session.calculate().unwrap();
        assert_eq!(result.total_xp, 800);
        assert!(session.result().is_some());
    }

    #[test]
    fn test_edit_clears_result() {
        let mut session = ready_session();
        session.calculate().unwrap();
        session.add_monster_group(1, 0, 1, None).unwrap();
        assert!(session.result().is_none());
    }

    #[test]
    fn test_remove_missing() {
        let mut session = ready_session();
        assert!(matches!(
            session.remove_monster_group(9),
            Err(SessionError::NotFound { roster: Roster::MonsterGroups, id: 9 })
        ));
    }

    #[test]
    fn test_empty_session_fails_validation() {
        let mut session = Session::new();
        assert!(matches!(
            session.calculate(),
            Err(SessionError::Validation(ValidationError::NoCharacters))
        ));
    }

    #[test]
    fn test_save_requires_result() {
        let session = ready_session();
        let mut history = CalculationHistory::new(MemoryStore::new());
        assert!(matches!(session.save(&mut history), Err(SessionError::NoResult)));
    }

    #[test]
    fn test_save_then_load_replaces_state() {
        let mut session = ready_session();
        session.calculate().unwrap();
        let mut history = CalculationHistory::new(MemoryStore::new());
        let saved = session.save(&mut history).unwrap();

        let mut other = Session::new();
        other.add_character(20, 0, None).unwrap();
        other.load(history.find(saved.id()).unwrap());

        assert_eq!(other.characters(), session.characters());
        assert_eq!(other.monsters(), session.monsters());
        assert_eq!(other.result(), session.result());
    }

    #[test]
    fn test_reset() {
        let mut session = ready_session();
        session.calculate().unwrap();
        session.reset();
        assert!(session.characters().is_empty());
        assert!(session.monsters().is_empty());
        assert!(session.result().is_none());
    }
}
