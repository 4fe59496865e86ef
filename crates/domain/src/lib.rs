//! Spellbindr domain - core data model for spellbook reconciliation.
//!
//! Pure types only: characters, the polymorphic records they own, change
//! events, and the value objects (icon policy, spellcasting detection, slot
//! pools) shared by the engine. No I/O, no async.

pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

pub use entities::{
    Character, CharacterKind, Record, RecordKind, RecordType, RitualSources, SpellAttributes,
    SpellbookContents,
};

pub use error::DomainError;
pub use events::ChangeEvent;

pub use ids::{CharacterId, RecordId};

pub use value_objects::{
    icon_path, is_spellcasting_class_name, select_icon, SlotPool, SpellSlots, GENERIC_ICON,
    ICON_PATH_PREFIX, PACT_SLOT_LABEL, SPELLCASTING_CLASS_KEYWORDS,
};
