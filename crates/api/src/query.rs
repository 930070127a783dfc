//! Shared query parameter types for API handlers.
//!
//! Common query structs that appear across multiple handler modules are
//! extracted here to avoid duplication. Entity-specific filters live next
//! to their handlers.

use serde::Deserialize;

/// Generic list parameters (`?q=&order=&limit=&offset=`).
///
/// `order` keys are resolved against each entity's explicit list
/// configuration in the repository layer; unknown keys are rejected.
/// `limit`/`offset` are clamped there as well.
#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Search term matched against the entity's searchable columns.
    pub q: Option<String>,
    pub order: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// List parameters for person-scoped resources
/// (`?person_id=&order=&limit=&offset=`).
///
/// Used by the engagement endpoints, which all key their rows to a person.
#[derive(Debug, Deserialize)]
pub struct PersonScopedParams {
    pub person_id: Option<i64>,
    pub order: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
