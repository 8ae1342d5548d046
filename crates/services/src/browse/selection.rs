use guide_core::model::CategoryFilter;

/// Ephemeral filter selection for a working list. Never persisted; a fresh
/// session always starts from the default (everything visible, natural
/// order).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrowseSelection {
    pub category: CategoryFilter,
    /// Quiz walkthroughs only: drop items whose latest answer was correct.
    pub exclude_mastered: bool,
    /// Takeaway walkthroughs only: keep only favorited items.
    pub favorites_only: bool,
}

impl BrowseSelection {
    /// True when no filter is active.
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.category.is_all() && !self.exclude_mastered && !self.favorites_only
    }
}
