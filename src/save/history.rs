//! Saved calculation history
//!
//! Past calculations are frozen snapshots stored as an ordered JSON array
//! under one key. Plain reads never fail: a missing, unreadable or malformed
//! document is treated as an empty history. Writes re-read strictly and
//! refuse to replace a document they cannot parse.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::store::KeyValueStore;
use crate::error::StoreError;
use crate::party::{Character, MonsterGroup};
use crate::xp::CalculationResult;

/// Default storage key for the history document
pub const DEFAULT_STORAGE_KEY: &str = "xp-calculator-history";

/// A calculation frozen at the moment it was saved
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedCalculation {
    id: String,
    created_at: DateTime<Utc>,
    characters: Vec<Character>,
    monsters: Vec<MonsterGroup>,
    result: CalculationResult,
}

impl SavedCalculation {
    /// Snapshot taken now
    pub fn new(characters: Vec<Character>, monsters: Vec<MonsterGroup>, result: CalculationResult) -> Self {
        Self::at(Utc::now(), characters, monsters, result)
    }

    /// Snapshot with an explicit creation time; the id derives from it
    pub fn at(
        created_at: DateTime<Utc>,
        characters: Vec<Character>,
        monsters: Vec<MonsterGroup>,
        result: CalculationResult,
    ) -> Self {
        Self {
            id: created_at.timestamp_millis().to_string(),
            created_at,
            characters,
            monsters,
            result,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn monsters(&self) -> &[MonsterGroup] {
        &self.monsters
    }

    pub fn result(&self) -> &CalculationResult {
        &self.result
    }

    /// Split into owned parts
    pub fn into_parts(self) -> (Vec<Character>, Vec<MonsterGroup>, CalculationResult) {
        (self.characters, self.monsters, self.result)
    }
}

/// Ordered list of saved calculations over a key-value store
pub struct CalculationHistory<S: KeyValueStore> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> CalculationHistory<S> {
    pub fn new(store: S) -> Self {
        Self::with_key(store, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(store: S, key: impl Into<String>) -> Self {
        Self { store, key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// All saved calculations, oldest first; empty if the history is unreadable
    pub fn all(&self) -> Vec<SavedCalculation> {
        match self.load() {
            Ok(saved) => saved,
            Err(e) => {
                log::warn!("Failed to load calculation history: {}, using empty list", e);
                Vec::new()
            }
        }
    }

    /// Strict read used before any write, so a broken document is never overwritten
    fn load(&self) -> Result<Vec<SavedCalculation>, StoreError> {
        match self.store.get(&self.key)? {
            Some(data) => Ok(serde_json::from_str(&data)?),
            None => Ok(Vec::new()),
        }
    }

    pub fn find(&self, id: &str) -> Option<SavedCalculation> {
        self.all().into_iter().find(|saved| saved.id == id)
    }

    /// Append a snapshot, returning it as stored
    ///
    /// Two saves within the same millisecond would share an id, so a
    /// colliding id gets a `-N` suffix.
    pub fn append(&mut self, mut saved: SavedCalculation) -> Result<SavedCalculation, StoreError> {
        let mut all = self.load()?;

        let base = saved.id.clone();
        let mut n = 2;
        while all.iter().any(|existing| existing.id == saved.id) {
            saved.id = format!("{}-{}", base, n);
            n += 1;
        }

        all.push(saved.clone());
        self.write(&all)?;
        log::info!("Saved calculation {}", saved.id);
        Ok(saved)
    }

    /// Delete by id; returns whether anything was removed
    pub fn delete(&mut self, id: &str) -> Result<bool, StoreError> {
        let mut all = self.load()?;
        let before = all.len();
        all.retain(|saved| saved.id != id);
        if all.len() == before {
            return Ok(false);
        }
        self.write(&all)?;
        log::info!("Deleted calculation {}", id);
        Ok(true)
    }

    /// Drop the whole history
    pub fn clear(&mut self) -> Result<(), StoreError> {
        self.store.remove(&self.key)?;
        log::info!("Cleared calculation history");
        Ok(())
    }

    fn write(&mut self, all: &[SavedCalculation]) -> Result<(), StoreError> {
        let json = serde_json::to_string(all)?;
        self.store.set(&self.key, &json)
    }
}
