//! In-memory store adapter.
//!
//! Implements all three store ports over concurrent maps. Used by service
//! tests and by hosts that keep documents in process.

use async_trait::async_trait;
use dashmap::DashMap;
use spellbindr_domain::{Character, CharacterId, Record, RecordId};

use super::ports::{CharacterStore, RecordPatch, RecordStore, SettingsStore, StoreError};

const BACKGROUND_IMAGE_KEY: &str = "backgroundImage";

/// In-process implementation of the store ports.
#[derive(Default)]
pub struct MemoryStore {
    characters: DashMap<CharacterId, Character>,
    records: DashMap<CharacterId, Vec<Record>>,
    settings: DashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a character, splitting its owned records into record storage.
    pub fn insert_character(&self, mut character: Character) {
        let records = std::mem::take(&mut character.records);
        self.records.insert(character.id, records);
        self.characters.insert(character.id, character);
    }
}

#[async_trait]
impl CharacterStore for MemoryStore {
    async fn get(&self, id: CharacterId) -> Result<Option<Character>, StoreError> {
        let Some(header) = self.characters.get(&id) else {
            return Ok(None);
        };
        let mut character = header.clone();
        character.records = self
            .records
            .get(&id)
            .map(|records| records.clone())
            .unwrap_or_default();
        Ok(Some(character))
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn list(&self, owner: CharacterId) -> Result<Vec<Record>, StoreError> {
        Ok(self
            .records
            .get(&owner)
            .map(|records| records.clone())
            .unwrap_or_default())
    }

    async fn create(&self, record: Record, owner: CharacterId) -> Result<Record, StoreError> {
        self.records.entry(owner).or_default().push(record.clone());
        Ok(record)
    }

    async fn update(&self, record_id: RecordId, patch: RecordPatch) -> Result<(), StoreError> {
        for mut records in self.records.iter_mut() {
            if let Some(record) = records.iter_mut().find(|record| record.id == record_id) {
                if let Some(name) = patch.name {
                    record.name = name;
                }
                if let Some(kind) = patch.kind {
                    record.kind = kind;
                }
                return Ok(());
            }
        }
        Err(StoreError::not_found("Record", record_id))
    }

    async fn delete(&self, owner: CharacterId, record_id: RecordId) -> Result<(), StoreError> {
        let Some(mut records) = self.records.get_mut(&owner) else {
            return Err(StoreError::not_found("Character", owner));
        };
        let len_before = records.len();
        records.retain(|record| record.id != record_id);
        if records.len() == len_before {
            return Err(StoreError::not_found("Record", record_id));
        }
        Ok(())
    }
}

#[async_trait]
impl SettingsStore for MemoryStore {
    async fn background_image(&self) -> Result<Option<String>, StoreError> {
        Ok(self
            .settings
            .get(BACKGROUND_IMAGE_KEY)
            .map(|value| value.clone()))
    }

    async fn set_background_image(&self, path: &str) -> Result<(), StoreError> {
        self.settings
            .insert(BACKGROUND_IMAGE_KEY.to_string(), path.to_string());
        Ok(())
    }
}
