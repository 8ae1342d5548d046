//! Relationship self-assessment: 1-5 ratings over the catalog's prompts
//! with completion and score percentages.
//!
//! Assessment answers are session-local by design; unlike quiz progress
//! they are never persisted.

use std::collections::BTreeMap;

use guide_core::model::AssessmentPrompt;

/// Lowest and highest rating a prompt accepts.
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Collects ratings for the self-assessment prompts and derives the score.
pub struct AssessmentService {
    prompts: Vec<AssessmentPrompt>,
    answers: BTreeMap<u32, u8>,
}

impl AssessmentService {
    #[must_use]
    pub fn new(prompts: Vec<AssessmentPrompt>) -> Self {
        Self {
            prompts,
            answers: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn prompts(&self) -> &[AssessmentPrompt] {
        &self.prompts
    }

    /// Records a rating for the given prompt, clamped into
    /// `MIN_RATING..=MAX_RATING`. Ratings for unknown prompt ids are
    /// ignored.
    pub fn answer(&mut self, prompt_id: u32, rating: u8) {
        if self.prompts.iter().any(|p| p.id() == prompt_id) {
            self.answers
                .insert(prompt_id, rating.clamp(MIN_RATING, MAX_RATING));
        }
    }

    #[must_use]
    pub fn rating(&self, prompt_id: u32) -> Option<u8> {
        self.answers.get(&prompt_id).copied()
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.prompts.is_empty() && self.answers.len() == self.prompts.len()
    }

    /// How much of the assessment has been filled in, as a 0-100 percent.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn progress_percent(&self) -> u8 {
        if self.prompts.is_empty() {
            return 0;
        }
        let fraction = self.answers.len() as f64 / self.prompts.len() as f64;
        (fraction * 100.0).round() as u8
    }

    /// Total rating as a percentage of the maximum possible, rounded.
    /// Callers gate on [`Self::is_complete`] before presenting this as a
    /// final score.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    #[must_use]
    pub fn score_percent(&self) -> u8 {
        let max = self.prompts.len() * usize::from(MAX_RATING);
        if max == 0 {
            return 0;
        }
        let total: usize = self.answers.values().map(|&v| usize::from(v)).sum();
        ((total as f64 / max as f64) * 100.0).round() as u8
    }

    /// Discards every rating.
    pub fn reset(&mut self) {
        self.answers.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use guide_core::model::Category;

    fn build_prompts(count: u32) -> Vec<AssessmentPrompt> {
        (1..=count)
            .map(|id| AssessmentPrompt::new(id, format!("Prompt {id}"), Category::new("Trust")))
            .collect()
    }

    #[test]
    fn completion_requires_every_prompt() {
        let mut assessment = AssessmentService::new(build_prompts(3));
        assessment.answer(1, 4);
        assessment.answer(2, 2);
        assert!(!assessment.is_complete());
        assert_eq!(assessment.progress_percent(), 67);

        assessment.answer(3, 5);
        assert!(assessment.is_complete());
        assert_eq!(assessment.progress_percent(), 100);
    }

    #[test]
    fn score_is_total_over_maximum() {
        let mut assessment = AssessmentService::new(build_prompts(2));
        assessment.answer(1, 5);
        assessment.answer(2, 5);
        assert_eq!(assessment.score_percent(), 100);

        assessment.answer(2, 2);
        // 7 of 10 possible points.
        assert_eq!(assessment.score_percent(), 70);
    }

    #[test]
    fn ratings_clamp_into_range() {
        let mut assessment = AssessmentService::new(build_prompts(1));
        assessment.answer(1, 9);
        assert_eq!(assessment.rating(1), Some(MAX_RATING));

        assessment.answer(1, 0);
        assert_eq!(assessment.rating(1), Some(MIN_RATING));
    }

    #[test]
    fn unknown_prompt_ids_are_ignored() {
        let mut assessment = AssessmentService::new(build_prompts(2));
        assessment.answer(99, 3);
        assert_eq!(assessment.answered_count(), 0);
        assert_eq!(assessment.rating(99), None);
    }

    #[test]
    fn re_rating_overwrites() {
        let mut assessment = AssessmentService::new(build_prompts(1));
        assessment.answer(1, 2);
        assessment.answer(1, 4);
        assert_eq!(assessment.rating(1), Some(4));
        assert_eq!(assessment.answered_count(), 1);
    }

    #[test]
    fn reset_discards_ratings() {
        let mut assessment = AssessmentService::new(build_prompts(2));
        assessment.answer(1, 3);
        assessment.reset();
        assert_eq!(assessment.answered_count(), 0);
        assert_eq!(assessment.score_percent(), 0);
        assert!(!assessment.is_complete());
    }
}
