//! Presentation-boundary data for a spellbook sheet.
//!
//! The view mappings and the slot-summary string are the sole data handed
//! to any rendering layer; rendering itself lives in the host.

use serde::Serialize;
use spellbindr_domain::{Character, SpellbookContents};

use crate::services::settings::{Settings, SettingsError};
use crate::use_cases::categorize::{categorize, SpellViews};
use crate::use_cases::summary::summarize_slots;

/// Everything a rendering layer needs to draw one spellbook.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetData {
    pub grouped: SpellViews,
    pub spell_slots: String,
    pub background: String,
}

/// Assemble sheet data for a spellbook owned by a character.
///
/// Recomputed fresh on every inspection; nothing here is cached or
/// persisted.
pub async fn build_sheet_data(
    character: &Character,
    contents: &SpellbookContents,
    settings: &Settings,
) -> Result<SheetData, SettingsError> {
    Ok(SheetData {
        grouped: categorize(contents),
        spell_slots: summarize_slots(character),
        background: settings.background_image().await?,
    })
}
