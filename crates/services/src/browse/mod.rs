//! Working-list derivation for the quiz and takeaway walkthroughs:
//! category filtering, mastered-exclusion, favorites-only mode, shuffle,
//! and current-index management.

mod browser;
mod position;
mod selection;

pub use browser::{Browser, VisibilityInputs};
pub use position::BrowsePosition;
pub use selection::BrowseSelection;

use guide_core::model::{Category, QuizQuestion, Takeaway};

/// Catalog items a [`Browser`] can walk: anything with a stable numeric id
/// and a category label.
pub trait BrowseItem: Clone {
    /// Stable catalog id, used for ordering, shuffle caching, and lookups.
    fn browse_id(&self) -> u32;

    /// Category label the category filter compares against.
    fn category_label(&self) -> &Category;
}

impl BrowseItem for QuizQuestion {
    fn browse_id(&self) -> u32 {
        self.id().value()
    }

    fn category_label(&self) -> &Category {
        self.category()
    }
}

impl BrowseItem for Takeaway {
    fn browse_id(&self) -> u32 {
        self.id().value()
    }

    fn category_label(&self) -> &Category {
        self.category()
    }
}
