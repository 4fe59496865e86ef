//! Spell slot resources.
//!
//! Pure data carriers: slot consumption and recovery are game-rule
//! semantics and live outside this system.

use serde::{Deserialize, Serialize};

/// Slot label reserved for pact-magic-style slots. Excluded from the slot
/// summary string.
pub const PACT_SLOT_LABEL: &str = "pact";

/// A (current, maximum) pair for one slot label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotPool {
    pub current: u8,
    pub max: u8,
}

impl SlotPool {
    pub fn new(current: u8, max: u8) -> Self {
        Self { current, max }
    }
}

/// A character's spell slot resources: slot label mapped to its pool, in
/// insertion order. Labels are display strings ("L1", "L2", "pact", ...).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpellSlots {
    #[serde(default)]
    entries: Vec<SlotEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SlotEntry {
    label: String,
    pool: SlotPool,
}

impl SpellSlots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with_pool(mut self, label: impl Into<String>, current: u8, max: u8) -> Self {
        self.set(label, SlotPool::new(current, max));
        self
    }

    /// Insert or replace the pool for a label, preserving first-insertion
    /// order.
    pub fn set(&mut self, label: impl Into<String>, pool: SlotPool) {
        let label = label.into();
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.label == label) {
            entry.pool = pool;
        } else {
            self.entries.push(SlotEntry { label, pool });
        }
    }

    pub fn get(&self, label: &str) -> Option<SlotPool> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.pool)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, SlotPool)> {
        self.entries
            .iter()
            .map(|entry| (entry.label.as_str(), entry.pool))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
