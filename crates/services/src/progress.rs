//! Quiz progress tracking: the latest answer per question plus derived
//! totals, persisted after every mutation.

use guide_core::Clock;
use guide_core::model::{AnsweredRecord, ProgressState, QuestionId};
use storage::Store;

/// Storage key for the persisted progress blob.
pub const PROGRESS_KEY: &str = "quiz-progress";

/// Owns the in-memory [`ProgressState`] for one session and keeps the store
/// in sync with it.
///
/// Storage failures never escape: reads fall back to a fresh empty state
/// and writes are folded into a warning, leaving the in-memory state
/// authoritative for the rest of the session.
pub struct ProgressService {
    store: Store,
    clock: Clock,
    state: ProgressState,
}

impl ProgressService {
    /// Loads persisted progress, or starts fresh if nothing usable is
    /// stored.
    #[must_use]
    pub fn load(store: Store, clock: Clock) -> Self {
        let state = store.get_or(PROGRESS_KEY, ProgressState::empty(clock.now()));
        Self {
            store,
            clock,
            state,
        }
    }

    /// Records the latest attempt for `id`, replacing any prior record,
    /// rederiving the totals, and persisting the whole state. Returns the
    /// new record so the caller can show immediate feedback.
    ///
    /// Repeating the same answer leaves the stored state unchanged; the
    /// totals never double count because they are derived, not accumulated.
    pub fn record_answer(
        &mut self,
        id: QuestionId,
        selected_option: usize,
        correct_option: usize,
    ) -> AnsweredRecord {
        let record =
            self.state
                .record_answer(id, selected_option, correct_option, self.clock.now());
        self.persist();
        record
    }

    /// Clears every record, zeroes the totals, and persists the empty
    /// state. Returns `true` so the caller can drive a reset confirmation.
    pub fn reset(&mut self) -> bool {
        self.state.reset(self.clock.now());
        self.persist();
        true
    }

    /// Latest record for `id`, if any. Pure lookup, no side effect.
    #[must_use]
    pub fn record(&self, id: QuestionId) -> Option<&AnsweredRecord> {
        self.state.record(id)
    }

    /// True if the latest answer for `id` was correct.
    #[must_use]
    pub fn is_mastered(&self, id: QuestionId) -> bool {
        self.state.is_mastered(id)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.state.answered_count()
    }

    #[must_use]
    pub fn total_correct(&self) -> u32 {
        self.state.total_correct()
    }

    #[must_use]
    pub fn total_incorrect(&self) -> u32 {
        self.state.total_incorrect()
    }

    /// Current state snapshot, e.g. for building visibility inputs.
    #[must_use]
    pub fn state(&self) -> &ProgressState {
        &self.state
    }

    fn persist(&self) {
        if let Err(err) = self.store.set(PROGRESS_KEY, &self.state) {
            log::warn!("persisting quiz progress failed, keeping in-memory state: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guide_core::time::{fixed_clock, fixed_now};
    use storage::{KeyValueStore, StorageError};

    fn qid(id: u32) -> QuestionId {
        QuestionId::new(id)
    }

    #[test]
    fn answers_persist_across_reloads() {
        let store = Store::in_memory();

        let mut service = ProgressService::load(store.clone(), fixed_clock());
        service.record_answer(qid(1), 0, 0);
        service.record_answer(qid(2), 0, 1);

        let reloaded = ProgressService::load(store, fixed_clock());
        assert_eq!(reloaded.total_correct(), 1);
        assert_eq!(reloaded.total_incorrect(), 1);
        assert!(reloaded.is_mastered(qid(1)));
        assert!(!reloaded.is_mastered(qid(2)));
    }

    #[test]
    fn reset_clears_persisted_state_too() {
        let store = Store::in_memory();

        let mut service = ProgressService::load(store.clone(), fixed_clock());
        service.record_answer(qid(1), 0, 0);
        assert!(service.reset());
        assert_eq!(service.record(qid(1)), None);

        let reloaded = ProgressService::load(store, fixed_clock());
        assert_eq!(reloaded.answered_count(), 0);
        assert_eq!(reloaded.total_correct(), 0);
        assert_eq!(reloaded.total_incorrect(), 0);
    }

    #[test]
    fn timestamps_come_from_the_injected_clock() {
        let later = fixed_now() + chrono::Duration::hours(2);
        let mut service = ProgressService::load(Store::in_memory(), Clock::fixed(later));

        let record = service.record_answer(qid(1), 0, 0);
        assert_eq!(record.answered_at, later);
        assert_eq!(service.state().last_updated(), later);
    }

    #[test]
    fn record_returns_the_new_attempt() {
        let mut service = ProgressService::load(Store::in_memory(), fixed_clock());
        let record = service.record_answer(qid(3), 2, 1);
        assert!(!record.is_correct);
        assert_eq!(record.selected_option, 2);
        assert_eq!(service.record(qid(3)), Some(&record));
    }

    /// Backend that fails every operation.
    struct OfflineStore;

    impl KeyValueStore for OfflineStore {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable("offline".into()))
        }

        fn write(&self, _key: &str, _raw: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("offline".into()))
        }

        fn delete(&self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("offline".into()))
        }
    }

    #[test]
    fn broken_storage_degrades_to_in_memory_only() {
        let store = Store::new(std::sync::Arc::new(OfflineStore));

        // Load falls back to the empty default without panicking.
        let mut service = ProgressService::load(store, fixed_clock());
        assert_eq!(service.answered_count(), 0);

        // Mutations still work; the failure is swallowed.
        let record = service.record_answer(qid(1), 0, 0);
        assert!(record.is_correct);
        assert_eq!(service.total_correct(), 1);
        assert!(service.reset());
    }

    #[test]
    fn corrupt_stored_blob_loads_as_fresh_state() {
        let store = Store::in_memory();
        store.set(PROGRESS_KEY, "not a progress blob").unwrap();

        let service = ProgressService::load(store, fixed_clock());
        assert_eq!(service.answered_count(), 0);
    }
}
