//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Catalog filter parameters (`?category=&search=`).
///
/// Both are optional: a missing category means `all`, a missing search means
/// no text filter. Parsed into a `FilterCriteria` by the handler.
#[derive(Debug, Default, Deserialize)]
pub struct CatalogParams {
    pub category: Option<String>,
    pub search: Option<String>,
}
