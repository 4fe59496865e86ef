//! Spellbindr engine - keeps derived spellbook records synchronized with a
//! character's spellcasting classes and renders their contents into
//! categorized views.
//!
//! The pure core ([`reconcile`], [`categorize`], [`summarize_slots`]) is
//! side-effect-free over immutable snapshots. The [`ReconcileService`]
//! embeds that core in a host runtime: it subscribes to change events,
//! talks to the host's persistence through the port traits in
//! [`infrastructure::ports`], and serializes the read-then-create sequence
//! per character.

pub mod infrastructure;
pub mod services;
pub mod use_cases;

pub use infrastructure::ports::{
    CharacterStore, ClockPort, ConfigRegistry, RecordPatch, RecordStore, SettingsStore, StoreError,
};
pub use infrastructure::{MemoryStore, SystemClock};

pub use services::{
    ReconcileError, ReconcileOutcome, ReconcileService, Settings, SettingsError,
    DEFAULT_BACKGROUND_IMAGE,
};

pub use use_cases::{
    build_sheet_data, categorize, reconcile, search_spells, summarize_slots, SheetData,
    SpellViews, SpellbookRequest, SLOT_SUMMARY_SEPARATOR,
};
