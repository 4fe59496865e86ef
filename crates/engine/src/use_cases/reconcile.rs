//! Spellbook reconciliation.
//!
//! Decides, for a character snapshot, which derived spellbook records are
//! missing. Pure function over the snapshot: calling it twice on an
//! already-reconciled character yields nothing, so repeated or out-of-order
//! change events are harmless.

use chrono::{DateTime, Utc};
use spellbindr_domain::{
    icon_path, is_spellcasting_class_name, select_icon, Character, Record, RecordId,
    SpellbookContents,
};

/// A creation request for one missing spellbook.
#[derive(Debug, Clone, PartialEq)]
pub struct SpellbookRequest {
    /// `"{owner}'s {class} Spellbook"`.
    pub name: String,
    /// Icon identifier from the icon-selection policy (bare file name).
    pub icon: String,
    pub description: String,
    /// The class record this spellbook derives from.
    pub source_class_id: RecordId,
}

impl SpellbookRequest {
    /// Build the persistable spellbook record for this request.
    pub fn into_record(self, now: DateTime<Utc>) -> Record {
        let contents =
            SpellbookContents::new(self.source_class_id, icon_path(&self.icon), self.description);
        Record::spellbook(self.name, contents, now)
    }
}

/// Compute the creation requests needed to reconcile a character's
/// spellbooks with its class list.
///
/// One request per spellcasting class record (matched by record id, not
/// class name) that has no existing spellbook with the same
/// `source_class_id`. Ineligible character kinds yield nothing. Spellbooks
/// whose source class has since been removed are left alone: there is no
/// deletion path here, stale books are accepted behavior.
pub fn reconcile(character: &Character) -> Vec<SpellbookRequest> {
    if !character.kind.is_reconcilable() {
        return Vec::new();
    }

    let alignment = character.alignment_lower();
    character
        .classes()
        .filter(|class| is_spellcasting_class_name(&class.name))
        .filter(|class| character.spellbook_for(class.id).is_none())
        .map(|class| SpellbookRequest {
            name: format!("{}'s {} Spellbook", character.name, class.name),
            icon: select_icon(&class.name, &alignment).to_string(),
            description: format!(
                "The personal spellbook of {}, containing all known {} spells.",
                character.name, class.name
            ),
            source_class_id: class.id,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use spellbindr_domain::CharacterKind;

    fn apply_all(character: &mut Character, requests: Vec<SpellbookRequest>) {
        let now = chrono::Utc::now();
        for request in requests {
            character.add_record(request.into_record(now));
        }
    }

    #[test]
    fn elora_scenario_emits_one_request() {
        let now = chrono::Utc::now();
        let class = Record::class("Battle Cleric", now);
        let class_id = class.id;
        let character = Character::new("Elora", CharacterKind::Player).with_record(class);

        let requests = reconcile(&character);

        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].name, "Elora's Battle Cleric Spellbook");
        assert_eq!(requests[0].icon, "cleric-holy.png");
        assert_eq!(requests[0].source_class_id, class_id);
        assert!(requests[0].description.contains("Elora"));
    }

    #[test]
    fn reconcile_is_idempotent_after_one_pass() {
        let now = chrono::Utc::now();
        let mut character = Character::new("Elora", CharacterKind::Player)
            .with_record(Record::class("Battle Cleric", now))
            .with_record(Record::class("Warlock", now));

        let requests = reconcile(&character);
        assert_eq!(requests.len(), 2);

        apply_all(&mut character, requests);
        assert!(reconcile(&character).is_empty());
    }

    #[test]
    fn converged_character_with_new_non_caster_class_stays_quiet() {
        let now = chrono::Utc::now();
        let mut character = Character::new("Elora", CharacterKind::Player)
            .with_record(Record::class("Battle Cleric", now));
        let requests = reconcile(&character);
        apply_all(&mut character, requests);

        character.add_record(Record::class("Rogue", now));
        assert!(reconcile(&character).is_empty());
    }

    #[test]
    fn keyword_match_is_case_insensitive_and_substring() {
        let now = chrono::Utc::now();
        let character = Character::new("Zan", CharacterKind::Npc)
            .with_record(Record::class("ARCANE WIZARD", now));
        assert_eq!(reconcile(&character).len(), 1);
    }

    #[test]
    fn ineligible_kinds_never_produce_requests() {
        let now = chrono::Utc::now();
        for kind in [CharacterKind::Vehicle, CharacterKind::Group] {
            let character =
                Character::new("Apparatus", kind).with_record(Record::class("Wizard", now));
            assert!(reconcile(&character).is_empty(), "{kind:?} must be ignored");
        }
    }

    #[test]
    fn both_eligible_kinds_are_reconciled() {
        let now = chrono::Utc::now();
        for kind in [CharacterKind::Player, CharacterKind::Npc] {
            let character = Character::new("Caster", kind).with_record(Record::class("Druid", now));
            assert_eq!(reconcile(&character).len(), 1, "{kind:?} must reconcile");
        }
    }

    #[test]
    fn duplicate_source_class_ids_do_not_create_a_third_book() {
        let now = chrono::Utc::now();
        let class = Record::class("Wizard", now);
        let class_id = class.id;
        let book = |name: &str| {
            Record::spellbook(
                name,
                SpellbookContents::new(class_id, "wizard-tome.png", ""),
                now,
            )
        };
        // two books erroneously share the same back-reference (manual edits)
        let character = Character::new("Elora", CharacterKind::Player)
            .with_record(class)
            .with_record(book("First"))
            .with_record(book("Second"));

        assert!(reconcile(&character).is_empty());
    }

    #[test]
    fn duplicate_named_classes_get_one_book_each() {
        let now = chrono::Utc::now();
        let first = Record::class("Wizard", now);
        let second = Record::class("Wizard", now);
        let ids = [first.id, second.id];
        let character = Character::new("Gemini", CharacterKind::Player)
            .with_record(first)
            .with_record(second);

        let requests = reconcile(&character);
        assert_eq!(requests.len(), 2);
        let request_ids: Vec<RecordId> = requests.iter().map(|r| r.source_class_id).collect();
        assert_eq!(request_ids, ids);
    }

    #[test]
    fn unnamed_class_is_simply_not_matched() {
        let now = chrono::Utc::now();
        let character =
            Character::new("Elora", CharacterKind::Player).with_record(Record::class("", now));
        assert!(reconcile(&character).is_empty());
    }

    #[test]
    fn class_icon_wins_over_alignment_hint() {
        let now = chrono::Utc::now();
        let character = Character::new("Morgath", CharacterKind::Npc)
            .with_alignment("Chaotic Evil")
            .with_record(Record::class("Warlock", now));

        let requests = reconcile(&character);
        assert_eq!(requests[0].icon, "warlock-pact.png");
    }

    #[test]
    fn into_record_carries_the_back_reference_and_icon_path() {
        let now = chrono::Utc::now();
        let class = Record::class("Battle Cleric", now);
        let class_id = class.id;
        let character = Character::new("Elora", CharacterKind::Player).with_record(class);

        let record = reconcile(&character)
            .pop()
            .map(|request| request.into_record(now))
            .expect("one request");

        let contents = record.as_spellbook().expect("is a spellbook");
        assert_eq!(contents.source_class_id, class_id);
        assert_eq!(contents.icon, "icons/cleric-holy.png");
        assert!(contents.is_empty());
    }
}
