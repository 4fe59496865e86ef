//! Change notification events.
//!
//! The host runtime delivers these whenever a character or one of its
//! records changes. The reconciliation service subscribes to all four kinds
//! and re-runs reconciliation for the affected character. This replaces the
//! original module's fan-out over a shared global dispatcher with a typed
//! interface.

use serde::{Deserialize, Serialize};

use crate::{CharacterId, RecordType};

/// A change notification from the host runtime.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ChangeEvent {
    CharacterCreated {
        character_id: CharacterId,
    },
    CharacterUpdated {
        character_id: CharacterId,
    },
    RecordCreated {
        character_id: CharacterId,
        record_type: RecordType,
    },
    RecordDeleted {
        character_id: CharacterId,
        record_type: RecordType,
    },
}

impl ChangeEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            Self::CharacterCreated { .. } => "character_created",
            Self::CharacterUpdated { .. } => "character_updated",
            Self::RecordCreated { .. } => "record_created",
            Self::RecordDeleted { .. } => "record_deleted",
        }
    }

    /// The character affected by this event.
    pub fn character_id(&self) -> CharacterId {
        match self {
            Self::CharacterCreated { character_id }
            | Self::CharacterUpdated { character_id }
            | Self::RecordCreated { character_id, .. }
            | Self::RecordDeleted { character_id, .. } => *character_id,
        }
    }

    /// Whether this event can change the outcome of reconciliation.
    ///
    /// Character-level events always can. Record-level events only matter
    /// for class and spell records; creating or deleting, say, an item never
    /// changes which spellbooks should exist.
    pub fn touches_spellcasting(&self) -> bool {
        match self {
            Self::CharacterCreated { .. } | Self::CharacterUpdated { .. } => true,
            Self::RecordCreated { record_type, .. } | Self::RecordDeleted { record_type, .. } => {
                matches!(record_type, RecordType::Class | RecordType::Spell)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn character_events_always_touch_spellcasting() {
        let id = CharacterId::new();
        assert!(ChangeEvent::CharacterCreated { character_id: id }.touches_spellcasting());
        assert!(ChangeEvent::CharacterUpdated { character_id: id }.touches_spellcasting());
    }

    #[test]
    fn record_events_filter_by_type() {
        let id = CharacterId::new();
        let class_created = ChangeEvent::RecordCreated {
            character_id: id,
            record_type: RecordType::Class,
        };
        let spell_deleted = ChangeEvent::RecordDeleted {
            character_id: id,
            record_type: RecordType::Spell,
        };
        let other_created = ChangeEvent::RecordCreated {
            character_id: id,
            record_type: RecordType::Other,
        };
        assert!(class_created.touches_spellcasting());
        assert!(spell_deleted.touches_spellcasting());
        assert!(!other_created.touches_spellcasting());
    }

    #[test]
    fn events_resolve_their_character() {
        let id = CharacterId::new();
        let event = ChangeEvent::RecordCreated {
            character_id: id,
            record_type: RecordType::Spell,
        };
        assert_eq!(event.character_id(), id);
        assert_eq!(event.event_type(), "record_created");
    }
}
