//! Error type shared by the catalog, index construction and configuration.

use thiserror::Error;

/// Errors raised at the edges of the catalog.
///
/// The index and sort operations themselves are total; only construction,
/// caller input validation and field-name parsing can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("index capacity must be positive, got {0}")]
    InvalidCapacity(usize),
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("invalid publication year `{0}`")]
    InvalidYear(String),
    #[error("search query is empty")]
    EmptyQuery,
    #[error("unknown sort field `{0}`")]
    UnknownSortField(String),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
