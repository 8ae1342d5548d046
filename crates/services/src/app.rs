//! Per-session application context: one constructed instance wiring the
//! catalog, the store, the clock, and both trackers. This is the only
//! surface the presentation layer calls; nothing here is a global.

use std::path::Path;

use guide_core::Clock;
use guide_core::model::{AnsweredRecord, QuestionId, QuizQuestion, Takeaway, TakeawayId};
use storage::Store;

use crate::assessment::AssessmentService;
use crate::browse::{Browser, VisibilityInputs};
use crate::catalog::Catalog;
use crate::favorites::FavoritesService;
use crate::progress::ProgressService;

/// Assembles the guide's services around one store and one clock.
pub struct GuideServices {
    catalog: Catalog,
    progress: ProgressService,
    favorites: FavoritesService,
}

impl GuideServices {
    /// Services over the embedded catalog and the given store.
    #[must_use]
    pub fn new(store: Store, clock: Clock) -> Self {
        Self::with_catalog(Catalog::builtin(), store, clock)
    }

    /// Services over an explicit catalog, for tests and tooling.
    #[must_use]
    pub fn with_catalog(catalog: Catalog, store: Store, clock: Clock) -> Self {
        let progress = ProgressService::load(store.clone(), clock);
        let favorites = FavoritesService::load(store, clock);
        Self {
            catalog,
            progress,
            favorites,
        }
    }

    /// Services persisting under the given profile directory.
    #[must_use]
    pub fn open_profile(dir: impl AsRef<Path>, clock: Clock) -> Self {
        Self::new(Store::json_file(dir.as_ref()), clock)
    }

    /// Services with no persistence beyond this process.
    #[must_use]
    pub fn in_memory(clock: Clock) -> Self {
        Self::new(Store::in_memory(), clock)
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub fn progress(&self) -> &ProgressService {
        &self.progress
    }

    #[must_use]
    pub fn favorites(&self) -> &FavoritesService {
        &self.favorites
    }

    /// Records an answer for the question, deriving correctness from the
    /// catalog. Returns `None` if the id is not in the catalog (stale ids
    /// are tolerated, not errors).
    pub fn record_answer(
        &mut self,
        id: QuestionId,
        selected_option: usize,
    ) -> Option<AnsweredRecord> {
        let correct_option = self.catalog.question(id)?.correct_answer();
        Some(
            self.progress
                .record_answer(id, selected_option, correct_option),
        )
    }

    /// Clears all quiz progress; returns `true` to drive the confirmation.
    pub fn reset_progress(&mut self) -> bool {
        self.progress.reset()
    }

    /// Latest answer record for the question, if any.
    #[must_use]
    pub fn answer_record(&self, id: QuestionId) -> Option<&AnsweredRecord> {
        self.progress.record(id)
    }

    /// Flips a card's favorite status; returns the resulting membership.
    pub fn toggle_favorite(&mut self, id: TakeawayId) -> bool {
        self.favorites.toggle(id)
    }

    #[must_use]
    pub fn is_favorite(&self, id: TakeawayId) -> bool {
        self.favorites.is_favorite(id)
    }

    /// Fresh browser over the quiz questions in catalog order.
    #[must_use]
    pub fn quiz_browser(&self) -> Browser<QuizQuestion> {
        Browser::new(self.catalog.questions().to_vec())
    }

    /// Fresh browser over the takeaway cards in catalog order.
    #[must_use]
    pub fn takeaway_browser(&self) -> Browser<Takeaway> {
        Browser::new(self.catalog.takeaways().to_vec())
    }

    /// Current visibility snapshot for quiz browsing. Capture a fresh one
    /// after every progress mutation; the browser holds no tracker state.
    #[must_use]
    pub fn quiz_visibility(&self) -> VisibilityInputs {
        VisibilityInputs::from_progress(self.progress.state())
    }

    /// Current visibility snapshot for takeaway browsing.
    #[must_use]
    pub fn takeaway_visibility(&self) -> VisibilityInputs {
        VisibilityInputs::from_favorites(self.favorites.state())
    }

    /// Fresh, unanswered self-assessment over the catalog's prompts.
    #[must_use]
    pub fn assessment(&self) -> AssessmentService {
        AssessmentService::new(self.catalog.assessment_prompts().to_vec())
    }
}
