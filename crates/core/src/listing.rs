//! Per-entity listing configuration.
//!
//! Each listable entity declares an explicit [`ListConfig`] naming the
//! order keys it accepts and the default ordering, constructed as a
//! constant next to its repository. Requested order keys are resolved
//! against that allowlist here; unknown keys are validation errors and
//! never reach SQL.

use crate::error::CoreError;

/// Listing configuration for one entity.
#[derive(Debug, Clone, Copy)]
pub struct ListConfig {
    /// Order keys accepted from the API, paired with the ORDER BY clause
    /// each resolves to.
    pub orderable: &'static [(&'static str, &'static str)],
    /// ORDER BY clause applied when the caller does not specify one.
    pub default_order: &'static str,
}

impl ListConfig {
    /// Resolve a requested order key to its ORDER BY clause.
    ///
    /// `None` yields the default order. Unknown keys are rejected so the
    /// key can never be interpolated into a query.
    pub fn resolve_order(&self, requested: Option<&str>) -> Result<&'static str, CoreError> {
        match requested {
            None => Ok(self.default_order),
            Some(key) => self
                .orderable
                .iter()
                .find(|(name, _)| *name == key)
                .map(|(_, clause)| *clause)
                .ok_or_else(|| CoreError::Validation(format!("Unknown order key: {key}"))),
        }
    }
}

/// Maximum page size for list endpoints.
pub const MAX_LIMIT: i64 = 200;

/// Default page size for list endpoints.
pub const DEFAULT_LIMIT: i64 = 50;

/// Clamp a requested limit to `1..=MAX_LIMIT`, defaulting when absent.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

/// Clamp a requested offset to be non-negative, defaulting to zero.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
