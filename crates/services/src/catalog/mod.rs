//! Static content catalog: the guide's questions, cards, long-form summary,
//! resources, and self-assessment material, embedded at compile time and
//! loaded once per session.

use serde::de::DeserializeOwned;

use guide_core::model::{
    AssessmentPrompt, BookSummary, Category, CommunicationExercise, QuestionId, QuizQuestion,
    ResourceEntry, Takeaway, TakeawayId,
};

use crate::error::CatalogError;

const QUESTIONS_JSON: &str = include_str!("data/questions.json");
const TAKEAWAYS_JSON: &str = include_str!("data/takeaways.json");
const SUMMARY_JSON: &str = include_str!("data/summary.json");
const RESOURCES_JSON: &str = include_str!("data/resources.json");
const ASSESSMENT_PROMPTS_JSON: &str = include_str!("data/assessment_prompts.json");
const EXERCISES_JSON: &str = include_str!("data/exercises.json");
const REFLECTIONS_JSON: &str = include_str!("data/reflections.json");

/// The immutable content the site presents. Loaded once at startup and
/// shared read-only; nothing in here changes after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    questions: Vec<QuizQuestion>,
    takeaways: Vec<Takeaway>,
    summary: BookSummary,
    resources: Vec<ResourceEntry>,
    assessment_prompts: Vec<AssessmentPrompt>,
    exercises: Vec<CommunicationExercise>,
    reflections: Vec<String>,
}

fn parse<T: DeserializeOwned>(dataset: &'static str, raw: &str) -> Result<T, CatalogError> {
    serde_json::from_str(raw).map_err(|source| CatalogError::Malformed { dataset, source })
}

impl Catalog {
    /// The embedded guide content. The datasets are compile-time artifacts,
    /// so a parse failure is a build defect, not a runtime condition.
    #[must_use]
    pub fn builtin() -> Self {
        Self::try_builtin().expect("embedded catalog datasets are well-formed")
    }

    /// Fallible variant of [`Self::builtin`], naming the dataset that
    /// failed.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if any embedded dataset fails to parse.
    pub fn try_builtin() -> Result<Self, CatalogError> {
        Ok(Self {
            questions: parse("questions", QUESTIONS_JSON)?,
            takeaways: parse("takeaways", TAKEAWAYS_JSON)?,
            summary: parse("summary", SUMMARY_JSON)?,
            resources: parse("resources", RESOURCES_JSON)?,
            assessment_prompts: parse("assessment_prompts", ASSESSMENT_PROMPTS_JSON)?,
            exercises: parse("exercises", EXERCISES_JSON)?,
            reflections: parse("reflections", REFLECTIONS_JSON)?,
        })
    }

    /// Catalog holding only the given quiz questions and takeaways; the
    /// remaining datasets are empty. Intended for tests.
    #[must_use]
    pub fn from_parts(questions: Vec<QuizQuestion>, takeaways: Vec<Takeaway>) -> Self {
        Self {
            questions,
            takeaways,
            summary: BookSummary::new(
                guide_core::model::BookOverview::new("", ""),
                Vec::new(),
            ),
            resources: Vec::new(),
            assessment_prompts: Vec::new(),
            exercises: Vec::new(),
            reflections: Vec::new(),
        }
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn takeaways(&self) -> &[Takeaway] {
        &self.takeaways
    }

    #[must_use]
    pub fn summary(&self) -> &BookSummary {
        &self.summary
    }

    #[must_use]
    pub fn resources(&self) -> &[ResourceEntry] {
        &self.resources
    }

    #[must_use]
    pub fn assessment_prompts(&self) -> &[AssessmentPrompt] {
        &self.assessment_prompts
    }

    #[must_use]
    pub fn exercises(&self) -> &[CommunicationExercise] {
        &self.exercises
    }

    #[must_use]
    pub fn reflections(&self) -> &[String] {
        &self.reflections
    }

    #[must_use]
    pub fn question(&self, id: QuestionId) -> Option<&QuizQuestion> {
        self.questions.iter().find(|q| q.id() == id)
    }

    #[must_use]
    pub fn takeaway(&self, id: TakeawayId) -> Option<&Takeaway> {
        self.takeaways.iter().find(|t| t.id() == id)
    }

    /// Quiz categories in first-appearance order, deduplicated.
    #[must_use]
    pub fn quiz_categories(&self) -> Vec<&Category> {
        dedup_categories(self.questions.iter().map(QuizQuestion::category))
    }

    /// Takeaway categories in first-appearance order, deduplicated.
    #[must_use]
    pub fn takeaway_categories(&self) -> Vec<&Category> {
        dedup_categories(self.takeaways.iter().map(Takeaway::category))
    }

    /// Resource types in first-appearance order, deduplicated.
    #[must_use]
    pub fn resource_types(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for entry in &self.resources {
            if !seen.contains(&entry.resource_type()) {
                seen.push(entry.resource_type());
            }
        }
        seen
    }
}

fn dedup_categories<'a>(categories: impl Iterator<Item = &'a Category>) -> Vec<&'a Category> {
    let mut seen = Vec::new();
    for category in categories {
        if !seen.contains(&category) {
            seen.push(category);
        }
    }
    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn builtin_catalog_loads() {
        let catalog = Catalog::builtin();
        assert!(!catalog.questions().is_empty());
        assert!(!catalog.takeaways().is_empty());
        assert!(!catalog.summary().sections().is_empty());
        assert!(!catalog.resources().is_empty());
        assert!(!catalog.assessment_prompts().is_empty());
        assert!(!catalog.exercises().is_empty());
        assert!(!catalog.reflections().is_empty());
    }

    #[test]
    fn question_ids_are_unique() {
        let catalog = Catalog::builtin();
        let ids: HashSet<_> = catalog.questions().iter().map(|q| q.id()).collect();
        assert_eq!(ids.len(), catalog.questions().len());
    }

    #[test]
    fn takeaway_ids_are_unique() {
        let catalog = Catalog::builtin();
        let ids: HashSet<_> = catalog.takeaways().iter().map(|t| t.id()).collect();
        assert_eq!(ids.len(), catalog.takeaways().len());
    }

    #[test]
    fn every_question_satisfies_the_input_contract() {
        // The runtime trusts this; the test is where it gets checked.
        let catalog = Catalog::builtin();
        for question in catalog.questions() {
            assert!(question.options().len() >= 2, "question {}", question.id());
            assert!(
                question.correct_answer() < question.options().len(),
                "question {}",
                question.id()
            );
        }
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::builtin();
        let first = &catalog.questions()[0];
        assert_eq!(catalog.question(first.id()), Some(first));
        assert_eq!(catalog.question(QuestionId::new(9999)), None);
    }

    #[test]
    fn categories_keep_first_appearance_order() {
        let catalog = Catalog::builtin();
        let categories = catalog.quiz_categories();
        assert!(!categories.is_empty());

        let unique: HashSet<_> = categories.iter().collect();
        assert_eq!(unique.len(), categories.len());
        assert_eq!(categories[0], catalog.questions()[0].category());
    }
}
