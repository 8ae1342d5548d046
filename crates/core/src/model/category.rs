use serde::{Deserialize, Serialize};
use std::fmt;

/// Free-form classification label attached to catalog items.
///
/// The catalog draws labels from a fixed editorial set, but the core treats
/// them as opaque strings and compares them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Category(String);

impl Category {
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Category selection for a working list, with `All` as the no-filter sentinel.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

/// Label the UI uses for the no-filter selection.
pub const ALL_CATEGORIES: &str = "All";

impl CategoryFilter {
    /// Maps a UI label onto a filter, treating `"All"` as the sentinel.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(Category::new(label))
        }
    }

    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Returns true if an item with the given category passes this filter.
    #[must_use]
    pub fn matches(&self, category: &Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == category,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_matches_everything() {
        let filter = CategoryFilter::All;
        assert!(filter.matches(&Category::new("Communication")));
        assert!(filter.matches(&Category::new("Strategy")));
    }

    #[test]
    fn only_matches_exact_label() {
        let filter = CategoryFilter::from_label("Communication");
        assert!(filter.matches(&Category::new("Communication")));
        assert!(!filter.matches(&Category::new("communication")));
        assert!(!filter.matches(&Category::new("Strategy")));
    }

    #[test]
    fn all_label_maps_to_sentinel() {
        assert!(CategoryFilter::from_label(ALL_CATEGORIES).is_all());
        assert!(!CategoryFilter::from_label("Treatment").is_all());
    }
}
