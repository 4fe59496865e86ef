//! Character entity - the owner of class, spell, and spellbook records.

use serde::{Deserialize, Serialize};

use crate::entities::record::Record;
use crate::value_objects::SpellSlots;
use crate::{CharacterId, RecordId};

/// A playable entity owning an ordered collection of records.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    pub id: CharacterId,
    pub name: String,
    pub kind: CharacterKind,
    /// Free-text alignment tag. Only used as a hint for icon selection.
    pub alignment: Option<String>,
    #[serde(default)]
    pub records: Vec<Record>,
    /// Spell slot resources, when the character has any.
    pub spell_slots: Option<SpellSlots>,
}

impl Character {
    pub fn new(name: impl Into<String>, kind: CharacterKind) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            kind,
            alignment: None,
            records: Vec::new(),
            spell_slots: None,
        }
    }

    pub fn with_alignment(mut self, alignment: impl Into<String>) -> Self {
        self.alignment = Some(alignment.into());
        self
    }

    pub fn with_record(mut self, record: Record) -> Self {
        self.records.push(record);
        self
    }

    pub fn with_spell_slots(mut self, slots: SpellSlots) -> Self {
        self.spell_slots = Some(slots);
        self
    }

    pub fn add_record(&mut self, record: Record) {
        self.records.push(record);
    }

    /// Lowercased alignment hint, empty when none is set.
    pub fn alignment_lower(&self) -> String {
        self.alignment
            .as_deref()
            .map(str::to_lowercase)
            .unwrap_or_default()
    }

    /// All class records owned directly by this character.
    pub fn classes(&self) -> impl Iterator<Item = &Record> {
        self.records.iter().filter(|record| record.is_class())
    }

    /// The spellbook generated from the given class record, if one exists.
    /// Exact-match on the back-reference only; existence is all that
    /// reconciliation needs, so duplicates are tolerated and the first wins.
    pub fn spellbook_for(&self, class_id: RecordId) -> Option<&Record> {
        self.records.iter().find(|record| {
            record
                .as_spellbook()
                .is_some_and(|contents| contents.source_class_id == class_id)
        })
    }
}

/// Classification of a character.
///
/// Only player characters and NPCs take part in spellbook reconciliation;
/// every other kind is left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CharacterKind {
    Player,
    Npc,
    Vehicle,
    Group,
}

impl CharacterKind {
    pub fn is_reconcilable(&self) -> bool {
        matches!(self, Self::Player | Self::Npc)
    }
}
