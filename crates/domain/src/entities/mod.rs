//! Domain entities.

pub mod character;
pub mod record;
pub mod spellbook;

pub use character::{Character, CharacterKind};
pub use record::{Record, RecordKind, RecordType, RitualSources, SpellAttributes};
pub use spellbook::SpellbookContents;
