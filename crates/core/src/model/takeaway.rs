use serde::{Deserialize, Serialize};

use super::category::Category;
use super::ids::TakeawayId;

/// A single key-takeaway flashcard: a titled insight with an illustration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Takeaway {
    id: TakeawayId,
    title: String,
    content: String,
    category: Category,
    /// Opaque image reference resolved by the presentation layer.
    image: String,
}

impl Takeaway {
    #[must_use]
    pub fn new(
        id: TakeawayId,
        title: impl Into<String>,
        content: impl Into<String>,
        category: Category,
        image: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            content: content.into(),
            category,
            image: image.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> TakeawayId {
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

    #[must_use]
    pub fn category(&self) -> &Category {
        &self.category
    }

    #[must_use]
    pub fn image(&self) -> &str {
        &self.image
    }
}
