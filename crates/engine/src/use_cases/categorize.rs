//! Spell categorization views.
//!
//! Partitions a spellbook's nested spells into the three display views.
//! Views are pure functions of the current collection and are recomputed on
//! every inspection, never persisted.

use std::collections::BTreeMap;

use serde::Serialize;
use spellbindr_domain::{Record, SpellbookContents};

/// Read-only, multi-keyed view over a spellbook's spells: view name to
/// level to ordered spell list. Membership overlaps - every spell is in
/// `all`, and conditionally in `prepared` and/or `rituals`.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellViews {
    pub all: BTreeMap<u8, Vec<Record>>,
    pub prepared: BTreeMap<u8, Vec<Record>>,
    pub rituals: BTreeMap<u8, Vec<Record>>,
}

impl SpellViews {
    pub fn is_empty(&self) -> bool {
        self.all.is_empty() && self.prepared.is_empty() && self.rituals.is_empty()
    }
}

/// Categorize a spellbook's nested spells.
///
/// Pure and total: an empty collection yields three empty maps, and a record
/// missing expected attributes degrades to the defaults baked in at
/// ingestion (level 0, prepared, non-ritual). Within a level, insertion
/// order of the nested collection is preserved - stable partition, no
/// re-sorting.
pub fn categorize(contents: &SpellbookContents) -> SpellViews {
    let mut views = SpellViews::default();
    for record in contents.spells() {
        let Some(attributes) = record.as_spell() else {
            continue;
        };
        views
            .all
            .entry(attributes.level)
            .or_default()
            .push(record.clone());
        if attributes.prepared {
            views
                .prepared
                .entry(attributes.level)
                .or_default()
                .push(record.clone());
        }
        if attributes.ritual {
            views
                .rituals
                .entry(attributes.level)
                .or_default()
                .push(record.clone());
        }
    }
    views
}

/// Filter nested spells by a case-insensitive name substring.
pub fn search_spells<'a>(contents: &'a SpellbookContents, term: &str) -> Vec<&'a Record> {
    let term = term.to_lowercase();
    contents
        .spells()
        .iter()
        .filter(|record| record.name.to_lowercase().contains(&term))
        .collect()
}
