#![forbid(unsafe_code)]

pub mod app;
pub mod assessment;
pub mod browse;
pub mod catalog;
pub mod error;
pub mod favorites;
pub mod library;
pub mod progress;

pub use guide_core::Clock;

pub use app::GuideServices;
pub use assessment::AssessmentService;
pub use browse::{Browser, BrowseItem, BrowsePosition, BrowseSelection, VisibilityInputs};
pub use catalog::Catalog;
pub use error::CatalogError;
pub use favorites::FavoritesService;
pub use library::{LibraryFilter, search_resources};
pub use progress::ProgressService;
