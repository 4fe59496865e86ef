//! Event-driven reconciliation service.
//!
//! Embeds the pure [`reconcile`] function in a host runtime: consumes
//! change events, resolves the affected character, re-reads its records
//! through the store, and issues creation requests for missing spellbooks.
//!
//! The read-then-create sequence is serialized per character through a lock
//! map, so near-simultaneous events for the same character cannot both
//! observe "no spellbook" and double-create. Creation failures are not
//! retried here; the next change event re-drives reconciliation and the
//! still-missing spellbook is picked up then.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use dashmap::DashMap;
use spellbindr_domain::{ChangeEvent, CharacterId, Record, RecordType};
use tokio::sync::Mutex;

use crate::infrastructure::ports::{
    CharacterStore, ClockPort, ConfigRegistry, RecordStore, StoreError,
};
use crate::use_cases::reconcile::reconcile;

/// Result of one reconciliation pass.
#[derive(Debug, Default)]
pub struct ReconcileOutcome {
    /// Spellbook records created during this pass, in class order.
    pub created: Vec<Record>,
}

impl ReconcileOutcome {
    pub fn is_noop(&self) -> bool {
        self.created.is_empty()
    }
}

/// Errors surfaced by the reconciliation service.
#[derive(Debug, thiserror::Error)]
pub enum ReconcileError {
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

/// Drives spellbook reconciliation from host change events.
pub struct ReconcileService {
    characters: Arc<dyn CharacterStore>,
    records: Arc<dyn RecordStore>,
    clock: Arc<dyn ClockPort>,
    /// Per-character mutual exclusion around read-then-create.
    locks: DashMap<CharacterId, Arc<Mutex<()>>>,
    registered: AtomicBool,
}

impl ReconcileService {
    pub fn new(
        characters: Arc<dyn CharacterStore>,
        records: Arc<dyn RecordStore>,
        clock: Arc<dyn ClockPort>,
    ) -> Self {
        Self {
            characters,
            records,
            clock,
            locks: DashMap::new(),
            registered: AtomicBool::new(false),
        }
    }

    /// Declare the spellbook record kind to the host's type registry.
    ///
    /// One-time initialization call; repeated invocations are no-ops.
    pub fn register(&self, registry: &dyn ConfigRegistry) {
        if self.registered.swap(true, Ordering::SeqCst) {
            return;
        }
        registry.register_record_kind("spellbook", "Spellbook");
        tracing::debug!("registered spellbook record kind");
    }

    /// React to one change notification from the host.
    ///
    /// Events that cannot change reconciliation outcomes (record events for
    /// kinds other than class/spell) are skipped without touching the store.
    pub async fn handle_event(
        &self,
        event: &ChangeEvent,
    ) -> Result<ReconcileOutcome, ReconcileError> {
        if !event.touches_spellcasting() {
            tracing::trace!(event = event.event_type(), "event ignored");
            return Ok(ReconcileOutcome::default());
        }
        self.reconcile_character(event.character_id()).await
    }

    /// Run one reconciliation pass for a character.
    ///
    /// Safe to call repeatedly and concurrently; an already-reconciled
    /// character yields a no-op outcome.
    pub async fn reconcile_character(
        &self,
        character_id: CharacterId,
    ) -> Result<ReconcileOutcome, ReconcileError> {
        let lock = self
            .locks
            .entry(character_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone();
        let _guard = lock.lock().await;

        let Some(mut character) = self.characters.get(character_id).await? else {
            tracing::debug!(%character_id, "character not found, skipping reconciliation");
            return Ok(ReconcileOutcome::default());
        };
        // re-read the record list under the lock; the event's snapshot may
        // be stale by the time we get here
        character.records = self.records.list(character_id).await?;

        let requests = reconcile(&character);
        if requests.is_empty() {
            tracing::debug!(%character_id, "already reconciled");
            return Ok(ReconcileOutcome::default());
        }

        let mut created = Vec::with_capacity(requests.len());
        for request in requests {
            let name = request.name.clone();
            let record = request.into_record(self.clock.now());
            match self.records.create(record, character_id).await {
                Ok(record) => {
                    tracing::info!(%character_id, spellbook = %name, "created spellbook");
                    created.push(record);
                }
                Err(error) => {
                    tracing::warn!(
                        %character_id,
                        spellbook = %name,
                        %error,
                        "spellbook creation failed; next change event will retry"
                    );
                    return Err(error.into());
                }
            }
        }
        Ok(ReconcileOutcome { created })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::ports::{
        MockCharacterStore, MockConfigRegistry, MockRecordStore,
    };
    use crate::infrastructure::{MemoryStore, SystemClock};
    use spellbindr_domain::{Character, CharacterKind, RecordKind};

    fn service_over(store: Arc<MemoryStore>) -> ReconcileService {
        ReconcileService::new(store.clone(), store, Arc::new(SystemClock))
    }

    fn cleric_named(name: &str) -> Character {
        let now = chrono::Utc::now();
        Character::new(name, CharacterKind::Player)
            .with_record(spellbindr_domain::Record::class("Battle Cleric", now))
    }

    fn spellbook_count(records: &[Record]) -> usize {
        records
            .iter()
            .filter(|record| matches!(record.kind, RecordKind::Spellbook(_)))
            .count()
    }

    #[tokio::test]
    async fn event_creates_missing_spellbook_then_converges() {
        let store = Arc::new(MemoryStore::new());
        let character = cleric_named("Elora");
        let character_id = character.id;
        store.insert_character(character);
        let service = service_over(store.clone());

        let event = ChangeEvent::CharacterCreated { character_id };
        let outcome = service.handle_event(&event).await.expect("pass succeeds");
        assert_eq!(outcome.created.len(), 1);
        assert_eq!(outcome.created[0].name, "Elora's Battle Cleric Spellbook");

        // the follow-up notification observes the satisfied state
        let event = ChangeEvent::RecordCreated {
            character_id,
            record_type: RecordType::Spell,
        };
        let outcome = service.handle_event(&event).await.expect("pass succeeds");
        assert!(outcome.is_noop());

        let records = store.list(character_id).await.expect("list succeeds");
        assert_eq!(spellbook_count(&records), 1);
    }

    #[tokio::test]
    async fn non_spellcasting_record_events_are_ignored() {
        let store = Arc::new(MemoryStore::new());
        let character = cleric_named("Elora");
        let character_id = character.id;
        store.insert_character(character);
        let service = service_over(store.clone());

        let event = ChangeEvent::RecordCreated {
            character_id,
            record_type: RecordType::Other,
        };
        let outcome = service.handle_event(&event).await.expect("pass succeeds");
        assert!(outcome.is_noop());

        // the qualifying class is still unreconciled - the event simply
        // could not have changed the outcome, so nothing was created
        let records = store.list(character_id).await.expect("list succeeds");
        assert_eq!(spellbook_count(&records), 0);
    }

    #[tokio::test]
    async fn unknown_character_is_a_silent_noop() {
        let store = Arc::new(MemoryStore::new());
        let service = service_over(store);

        let outcome = service
            .reconcile_character(CharacterId::new())
            .await
            .expect("pass succeeds");
        assert!(outcome.is_noop());
    }

    #[tokio::test]
    async fn concurrent_events_never_double_create() {
        let store = Arc::new(MemoryStore::new());
        let character = cleric_named("Elora");
        let character_id = character.id;
        store.insert_character(character);
        let service = Arc::new(service_over(store.clone()));

        let event = ChangeEvent::CharacterUpdated { character_id };
        let (first, second, third) = tokio::join!(
            service.handle_event(&event),
            service.handle_event(&event),
            service.handle_event(&event),
        );
        let created = first.expect("pass succeeds").created.len()
            + second.expect("pass succeeds").created.len()
            + third.expect("pass succeeds").created.len();
        assert_eq!(created, 1);

        let records = store.list(character_id).await.expect("list succeeds");
        assert_eq!(spellbook_count(&records), 1);
    }

    #[tokio::test]
    async fn creation_failure_surfaces_without_retry() {
        let now = chrono::Utc::now();
        let class = spellbindr_domain::Record::class("Battle Cleric", now);
        let character = Character::new("Elora", CharacterKind::Player);
        let character_id = character.id;

        let mut characters = MockCharacterStore::new();
        characters
            .expect_get()
            .returning(move |_| Ok(Some(character.clone())));

        let mut records = MockRecordStore::new();
        records
            .expect_list()
            .returning(move |_| Ok(vec![class.clone()]));
        // exactly one attempt - the service must not retry internally
        records
            .expect_create()
            .times(1)
            .returning(|_, _| Err(StoreError::backend("create", "host rejected the document")));

        let service = ReconcileService::new(
            Arc::new(characters),
            Arc::new(records),
            Arc::new(SystemClock),
        );

        let result = service.reconcile_character(character_id).await;
        assert!(matches!(result, Err(ReconcileError::Store(_))));
    }

    #[tokio::test]
    async fn registration_happens_exactly_once() {
        let store = Arc::new(MemoryStore::new());
        let service = service_over(store);

        let mut registry = MockConfigRegistry::new();
        registry
            .expect_register_record_kind()
            .times(1)
            .withf(|kind, label| kind == "spellbook" && label == "Spellbook")
            .return_const(());

        service.register(&registry);
        service.register(&registry);
    }
}
