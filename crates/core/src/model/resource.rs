use serde::{Deserialize, Serialize};

use super::ids::ResourceId;

/// A curated external resource: a book, article, or study with its citation
/// metadata and focus tags. Field names match the catalog's snake_case wire
/// shape, so no renames are needed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceEntry {
    id: ResourceId,
    title: String,
    authors: String,
    year: String,
    summary: String,
    full_summary: String,
    link: String,
    resource_type: String,
    article_type: String,
    focus: Vec<String>,
}

impl ResourceEntry {
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn new(
        id: ResourceId,
        title: impl Into<String>,
        authors: impl Into<String>,
        year: impl Into<String>,
        summary: impl Into<String>,
        full_summary: impl Into<String>,
        link: impl Into<String>,
        resource_type: impl Into<String>,
        article_type: impl Into<String>,
        focus: Vec<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            authors: authors.into(),
            year: year.into(),
            summary: summary.into(),
            full_summary: full_summary.into(),
            link: link.into(),
            resource_type: resource_type.into(),
            article_type: article_type.into(),
            focus,
        }
    }

    #[must_use]
    pub fn id(&self) -> ResourceId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn authors(&self) -> &str {
        &self.authors
    }

    #[must_use]
    pub fn year(&self) -> &str {
        &self.year
    }

    #[must_use]
    pub fn summary(&self) -> &str {
        &self.summary
    }

    #[must_use]
    pub fn full_summary(&self) -> &str {
        &self.full_summary
    }

    #[must_use]
    pub fn link(&self) -> &str {
        &self.link
    }

    #[must_use]
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    #[must_use]
    pub fn article_type(&self) -> &str {
        &self.article_type
    }

    #[must_use]
    pub fn focus(&self) -> &[String] {
        &self.focus
    }
}
