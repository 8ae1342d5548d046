use serde::{Deserialize, Serialize};

/// Opening overview of the long-form book summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookOverview {
    title: String,
    content: String,
}

impl BookOverview {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// One chapter-level section of the book summary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSection {
    id: u32,
    title: String,
    content: String,
}

impl BookSection {
    #[must_use]
    pub fn new(id: u32, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
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
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// The complete long-form summary: an overview plus ordered sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSummary {
    overview: BookOverview,
    sections: Vec<BookSection>,
}

impl BookSummary {
    #[must_use]
    pub fn new(overview: BookOverview, sections: Vec<BookSection>) -> Self {
        Self { overview, sections }
    }

    #[must_use]
    pub fn overview(&self) -> &BookOverview {
        &self.overview
    }

    #[must_use]
    pub fn sections(&self) -> &[BookSection] {
        &self.sections
    }

    #[must_use]
    pub fn section(&self, id: u32) -> Option<&BookSection> {
        self.sections.iter().find(|s| s.id == id)
    }
}
