use solea_core::error::CoreError;

/// Error type returned by all repository operations.
///
/// Write paths that enforce domain invariants inside a transaction
/// (slot ranges, the feedback guard, status transitions) surface those
/// failures as [`CoreError`]; everything else is a driver error.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),

    #[error(transparent)]
    Domain(#[from] CoreError),
}
