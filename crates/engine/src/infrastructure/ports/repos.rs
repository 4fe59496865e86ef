//! Store port traits for the host's persistence layer.
//!
//! The host runtime owns persistence; these traits are the in-process
//! boundary the engine talks through. The reconciliation path only ever
//! calls `RecordStore::list` and `RecordStore::create`; `update` and
//! `delete` exist for hosts wiring spell edits through the same boundary.

use async_trait::async_trait;
use spellbindr_domain::{Character, CharacterId, Record, RecordId};

use super::error::StoreError;
use super::types::RecordPatch;

// =============================================================================
// Record storage
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// All records owned directly by a character.
    async fn list(&self, owner: CharacterId) -> Result<Vec<Record>, StoreError>;

    /// Persist a new record under an owner. Returns the stored record.
    async fn create(&self, record: Record, owner: CharacterId) -> Result<Record, StoreError>;

    /// Apply partial attributes to an existing record.
    async fn update(&self, record_id: RecordId, patch: RecordPatch) -> Result<(), StoreError>;

    /// Remove a record from an owner.
    async fn delete(&self, owner: CharacterId, record_id: RecordId) -> Result<(), StoreError>;
}

// =============================================================================
// Character resolution
// =============================================================================

/// Resolves the character a change event refers to.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterStore: Send + Sync {
    async fn get(&self, id: CharacterId) -> Result<Option<Character>, StoreError>;
}

// =============================================================================
// Settings storage
// =============================================================================

/// World-scoped settings storage. A single persisted setting: the sheet
/// background image path. Read-only from the engine's perspective apart
/// from the host-driven setter.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsStore: Send + Sync {
    async fn background_image(&self) -> Result<Option<String>, StoreError>;
    async fn set_background_image(&self, path: &str) -> Result<(), StoreError>;
}
