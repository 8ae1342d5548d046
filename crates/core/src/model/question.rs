use serde::{Deserialize, Serialize};

use super::category::Category;
use super::ids::QuestionId;

/// A single multiple-choice quiz question.
///
/// Questions are immutable after catalog load. The catalog input contract
/// guarantees at least two options and a valid `correct_answer` index; the
/// core does not re-check either at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    id: QuestionId,
    #[serde(rename = "question")]
    prompt: String,
    options: Vec<String>,
    correct_answer: usize,
    explanation: String,
    category: Category,
}

impl QuizQuestion {
    #[must_use]
    pub fn new(
        id: QuestionId,
        prompt: impl Into<String>,
        options: Vec<String>,
        correct_answer: usize,
        explanation: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            options,
            correct_answer,
            explanation: explanation.into(),
            category,
        }
    }

    #[must_use]
    pub fn id(&self) -> QuestionId {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Index of the correct option within `options`.
    #[must_use]
    pub fn correct_answer(&self) -> usize {
        self.correct_answer
    }

    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    /// Returns true if the selected option index is the correct one.
    #[must_use]
    pub fn is_correct(&self, selected_option: usize) -> bool {
        selected_option == self.correct_answer
    }
}
