use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::ids::QuestionId;

/// Latest recorded attempt for a single question. Re-answering overwrites
/// the previous record; no attempt history is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnsweredRecord {
    pub is_correct: bool,
    #[serde(rename = "selectedAnswer")]
    pub selected_option: usize,
    pub answered_at: DateTime<Utc>,
}

/// Per-profile quiz progress: the latest answer per question plus aggregate
/// counts.
///
/// Invariant: `total_correct + total_incorrect` equals the number of
/// answered questions, and `total_correct` equals the number whose latest
/// answer was correct. The totals are recomputed from the record map on
/// every mutation, never incremented in place, so they cannot drift.
///
/// The serde shape is the persisted wire format; see the field renames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressState {
    #[serde(rename = "answeredQuestions")]
    answered: BTreeMap<QuestionId, AnsweredRecord>,
    total_correct: u32,
    total_incorrect: u32,
    last_updated: DateTime<Utc>,
}

impl ProgressState {
    /// Fresh state with no answers recorded.
    #[must_use]
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            answered: BTreeMap::new(),
            total_correct: 0,
            total_incorrect: 0,
            last_updated: now,
        }
    }

    /// Records the latest attempt for `id`, replacing any prior record, and
    /// rederives both totals from the full record map.
    ///
    /// Correctness is a pure index comparison; an out-of-range selection
    /// records as incorrect.
    pub fn record_answer(
        &mut self,
        id: QuestionId,
        selected_option: usize,
        correct_option: usize,
        now: DateTime<Utc>,
    ) -> AnsweredRecord {
        let record = AnsweredRecord {
            is_correct: selected_option == correct_option,
            selected_option,
            answered_at: now,
        };
        self.answered.insert(id, record.clone());
        self.recompute_totals();
        self.last_updated = now;
        record
    }

    /// Clears every record and zeroes the totals.
    pub fn reset(&mut self, now: DateTime<Utc>) {
        self.answered.clear();
        self.recompute_totals();
        self.last_updated = now;
    }

    /// Latest record for `id`, if it has been answered.
    #[must_use]
    pub fn record(&self, id: QuestionId) -> Option<&AnsweredRecord> {
        self.answered.get(&id)
    }

    /// True if the latest answer for `id` was correct.
    #[must_use]
    pub fn is_mastered(&self, id: QuestionId) -> bool {
        self.answered.get(&id).is_some_and(|r| r.is_correct)
    }

    /// Ids whose latest answer was correct, in id order.
    pub fn mastered_ids(&self) -> impl Iterator<Item = QuestionId> + '_ {
        self.answered
            .iter()
            .filter(|(_, r)| r.is_correct)
            .map(|(id, _)| *id)
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answered.len()
    }

    #[must_use]
    pub fn total_correct(&self) -> u32 {
        self.total_correct
    }

    #[must_use]
    pub fn total_incorrect(&self) -> u32 {
        self.total_incorrect
    }

    #[must_use]
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }

    fn recompute_totals(&mut self) {
        let correct = self.answered.values().filter(|r| r.is_correct).count();
        let total = self.answered.len();
        self.total_correct = u32::try_from(correct).unwrap_or(u32::MAX);
        self.total_incorrect = u32::try_from(total - correct).unwrap_or(u32::MAX);
    }
}
