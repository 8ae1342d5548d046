//! Resource library filtering: a type filter plus free-text search over
//! the curated external resources.

use guide_core::model::ResourceEntry;

/// Filter selection for the resource library. Like the browse filters this
/// is ephemeral UI state, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LibraryFilter {
    /// `None` means the `"All"` sentinel: every resource type passes.
    pub resource_type: Option<String>,
    /// Case-insensitive substring query; empty means no text filter.
    pub query: String,
}

impl LibraryFilter {
    /// Maps a UI label onto a type filter, treating `"All"` as the
    /// sentinel.
    #[must_use]
    pub fn from_type_label(label: &str) -> Self {
        Self {
            resource_type: (label != "All").then(|| label.to_owned()),
            query: String::new(),
        }
    }

    /// Same filter with the given search query.
    #[must_use]
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }
}

/// Applies the filter and returns matching resources in catalog order.
/// An empty result is a normal state the caller renders as such.
#[must_use]
pub fn search_resources<'a>(
    resources: &'a [ResourceEntry],
    filter: &LibraryFilter,
) -> Vec<&'a ResourceEntry> {
    let needle = filter.query.trim().to_lowercase();
    resources
        .iter()
        .filter(|entry| {
            filter
                .resource_type
                .as_deref()
                .is_none_or(|wanted| entry.resource_type() == wanted)
        })
        .filter(|entry| needle.is_empty() || matches_query(entry, &needle))
        .collect()
}

fn matches_query(entry: &ResourceEntry, needle: &str) -> bool {
    entry.title().to_lowercase().contains(needle)
        || entry.authors().to_lowercase().contains(needle)
        || entry.summary().to_lowercase().contains(needle)
        || entry
            .focus()
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}
