//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted while parsing catalog datasets.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog dataset {dataset:?} failed to parse: {source}")]
    Malformed {
        dataset: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
