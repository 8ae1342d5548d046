use serde::{Deserialize, Serialize};

use super::category::Category;

/// One agree/disagree statement in the relationship self-assessment,
/// rated by the user on a 1-5 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentPrompt {
    id: u32,
    #[serde(rename = "question")]
    prompt: String,
    category: Category,
}

impl AssessmentPrompt {
    #[must_use]
    pub fn new(id: u32, prompt: impl Into<String>, category: Category) -> Self {
        Self {
            id,
            prompt: prompt.into(),
            category,
        }
    }

    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[must_use]
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }
}

/// A guided communication exercise for couples: a titled sequence of steps
/// with an estimated duration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunicationExercise {
    id: u32,
    title: String,
    description: String,
    steps: Vec<String>,
    duration: String,
}

impl CommunicationExercise {
    #[must_use]
    pub fn new(
        id: u32,
        title: impl Into<String>,
        description: impl Into<String>,
        steps: Vec<String>,
        duration: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            steps,
            duration: duration.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    #[must_use]
    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    #[must_use]
    pub fn duration(&self) -> &str {
        &self.duration
    }
}
