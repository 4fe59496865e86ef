//! Polymorphic records owned by a character.
//!
//! A record is the single unit of content ownership: character classes,
//! spells, and the derived spellbooks that contain spells are all records
//! discriminated by [`RecordKind`]. Kinds this crate does not participate in
//! degrade to [`RecordKind::Other`] rather than failing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::spellbook::SpellbookContents;
use crate::RecordId;

/// A unit of content owned by a character or nested inside a spellbook.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Record {
    pub id: RecordId,
    /// Display name. For class records this doubles as the class name used
    /// for spellcasting detection.
    pub name: String,
    pub kind: RecordKind,
    pub created_at: DateTime<Utc>,
}

impl Record {
    pub fn new(name: impl Into<String>, kind: RecordKind, now: DateTime<Utc>) -> Self {
        Self {
            id: RecordId::new(),
            name: name.into(),
            kind,
            created_at: now,
        }
    }

    /// Create a class record.
    pub fn class(name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self::new(name, RecordKind::Class, now)
    }

    /// Create a spell record.
    pub fn spell(name: impl Into<String>, attributes: SpellAttributes, now: DateTime<Utc>) -> Self {
        Self::new(name, RecordKind::Spell(attributes), now)
    }

    /// Create a spellbook record.
    pub fn spellbook(
        name: impl Into<String>,
        contents: SpellbookContents,
        now: DateTime<Utc>,
    ) -> Self {
        Self::new(name, RecordKind::Spellbook(contents), now)
    }

    /// Create a record of a kind this system does not participate in.
    pub fn other(name: impl Into<String>, now: DateTime<Utc>) -> Self {
        Self::new(name, RecordKind::Other, now)
    }

    pub fn record_type(&self) -> RecordType {
        self.kind.record_type()
    }

    pub fn is_class(&self) -> bool {
        matches!(self.kind, RecordKind::Class)
    }

    pub fn as_spell(&self) -> Option<&SpellAttributes> {
        match &self.kind {
            RecordKind::Spell(attributes) => Some(attributes),
            _ => None,
        }
    }

    pub fn as_spellbook(&self) -> Option<&SpellbookContents> {
        match &self.kind {
            RecordKind::Spellbook(contents) => Some(contents),
            _ => None,
        }
    }

    pub fn as_spellbook_mut(&mut self) -> Option<&mut SpellbookContents> {
        match &mut self.kind {
            RecordKind::Spellbook(contents) => Some(contents),
            _ => None,
        }
    }
}

/// Kind-discriminated payload of a record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum RecordKind {
    /// A character class. The record name carries the class name.
    Class,
    /// A castable spell.
    Spell(SpellAttributes),
    /// A derived spellbook container.
    Spellbook(SpellbookContents),
    /// Any other record kind (items, feats, ...). Ignored by this system.
    Other,
}

impl RecordKind {
    pub fn record_type(&self) -> RecordType {
        match self {
            Self::Class => RecordType::Class,
            Self::Spell(_) => RecordType::Spell,
            Self::Spellbook(_) => RecordType::Spellbook,
            Self::Other => RecordType::Other,
        }
    }
}

/// Lightweight kind tag, carried by change events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordType {
    Class,
    Spell,
    Spellbook,
    Other,
}

/// Attributes of a spell record.
///
/// The ritual flag is derived once at ingestion from the legacy source
/// shapes (see [`RitualSources`]); read sites never re-derive it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SpellAttributes {
    /// Spell level (cantrip = 0). Missing source data defaults to 0.
    #[serde(default)]
    pub level: u8,
    /// Whether the spell is currently prepared. Defaults to true when the
    /// source attribute is absent.
    #[serde(default = "default_prepared")]
    pub prepared: bool,
    /// Whether the spell can be cast as a ritual.
    #[serde(default)]
    pub ritual: bool,
}

fn default_prepared() -> bool {
    true
}

impl Default for SpellAttributes {
    fn default() -> Self {
        Self {
            level: 0,
            prepared: true,
            ritual: false,
        }
    }
}

impl SpellAttributes {
    pub fn new(level: u8) -> Self {
        Self {
            level,
            ..Self::default()
        }
    }

    /// Build attributes from raw source data, applying the default policy:
    /// missing level is 0, missing prepared is true, and the ritual flag is
    /// the logical OR over all legacy shapes that carried it.
    pub fn ingest(level: Option<u8>, prepared: Option<bool>, rituals: RitualSources) -> Self {
        Self {
            level: level.unwrap_or(0),
            prepared: prepared.unwrap_or(true),
            ritual: rituals.resolve(),
        }
    }

    pub fn with_prepared(mut self, prepared: bool) -> Self {
        self.prepared = prepared;
        self
    }

    pub fn with_ritual(mut self, ritual: bool) -> Self {
        self.ritual = ritual;
        self
    }
}

/// The three shapes the ritual marker has taken across source versions:
/// membership in a capability set, a plain boolean field, and a boolean
/// nested under the preparation block. Any one being truthy marks the spell
/// as a ritual.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RitualSources {
    /// "ritual" present in the record's capability/property set.
    pub in_property_set: bool,
    /// Plain `ritual` boolean field.
    pub flag: Option<bool>,
    /// Boolean nested in the preparation block.
    pub preparation_mode: Option<bool>,
}

impl RitualSources {
    pub fn resolve(self) -> bool {
        self.in_property_set
            || self.flag.unwrap_or(false)
            || self.preparation_mode.unwrap_or(false)
    }
}
