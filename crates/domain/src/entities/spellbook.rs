//! Spellbook contents - the nested spell collection of a spellbook record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::record::Record;
use crate::{DomainError, RecordId};

/// Payload of a spellbook record.
///
/// Carries the back-reference to the class record it was generated from and
/// owns the nested spell collection. The collection is freely mutable by the
/// owner; categorization views over it are never persisted and must be
/// recomputed after every mutation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpellbookContents {
    /// The class record this spellbook was generated from. Exact-match key
    /// for reconciliation; never rewritten after creation.
    pub source_class_id: RecordId,
    /// Icon identifier chosen at creation time.
    pub icon: String,
    #[serde(default)]
    pub description: String,
    /// Nested spell records, in insertion order.
    #[serde(default)]
    spells: Vec<Record>,
}

impl SpellbookContents {
    /// Create empty contents for a freshly generated spellbook.
    pub fn new(
        source_class_id: RecordId,
        icon: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            source_class_id,
            icon: icon.into(),
            description: description.into(),
            spells: Vec::new(),
        }
    }

    pub fn spells(&self) -> &[Record] {
        &self.spells
    }

    pub fn is_empty(&self) -> bool {
        self.spells.is_empty()
    }

    /// Import a spell by cloning it into the nested collection
    /// (copy-on-drop semantics: the source record is untouched and the copy
    /// gets a fresh identity).
    ///
    /// Returns the id of the imported copy.
    pub fn import_spell(
        &mut self,
        source: &Record,
        now: DateTime<Utc>,
    ) -> Result<RecordId, DomainError> {
        if source.as_spell().is_none() {
            return Err(DomainError::constraint(format!(
                "only spell records can be imported into a spellbook, got {:?}",
                source.record_type()
            )));
        }
        let mut copy = source.clone();
        copy.id = RecordId::new();
        copy.created_at = now;
        let id = copy.id;
        self.spells.push(copy);
        Ok(id)
    }

    /// Remove a nested spell by id. Returns false if no such spell exists.
    pub fn remove_spell(&mut self, id: RecordId) -> bool {
        let len_before = self.spells.len();
        self.spells.retain(|record| record.id != id);
        self.spells.len() < len_before
    }

    /// Toggle the prepared flag of a nested spell. Returns false if the id
    /// does not resolve to a spell record.
    pub fn set_prepared(&mut self, id: RecordId, prepared: bool) -> bool {
        for record in &mut self.spells {
            if record.id == id {
                if let crate::RecordKind::Spell(attributes) = &mut record.kind {
                    attributes.prepared = prepared;
                    return true;
                }
                return false;
            }
        }
        false
    }
}
