//! Core use cases: reconciliation, categorization, slot summary, sheet data.

pub mod categorize;
pub mod reconcile;
pub mod sheet;
pub mod summary;

pub use categorize::{categorize, search_spells, SpellViews};
pub use reconcile::{reconcile, SpellbookRequest};
pub use sheet::{build_sheet_data, SheetData};
pub use summary::{summarize_slots, SLOT_SUMMARY_SEPARATOR};
