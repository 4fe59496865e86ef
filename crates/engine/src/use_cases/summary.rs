//! Spell-slot summary string.

use spellbindr_domain::{Character, PACT_SLOT_LABEL};

/// Separator between slot fragments.
pub const SLOT_SUMMARY_SEPARATOR: &str = " \u{2022} ";

/// Format a character's spell slots for display.
///
/// One `"{label}: {current}/{max}"` fragment per slot label with a non-zero
/// maximum, skipping the reserved pact label. Empty string when the
/// character has no slot resources at all. Purely a formatting transform.
pub fn summarize_slots(character: &Character) -> String {
    let Some(slots) = &character.spell_slots else {
        return String::new();
    };
    slots
        .iter()
        .filter(|(label, pool)| *label != PACT_SLOT_LABEL && pool.max > 0)
        .map(|(label, pool)| format!("{label}: {}/{}", pool.current, pool.max))
        .collect::<Vec<_>>()
        .join(SLOT_SUMMARY_SEPARATOR)
}
