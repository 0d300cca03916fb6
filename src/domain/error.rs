//! Error types for the collection core.
//!
//! This module defines the centralized error type [`TangochoError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.

use thiserror::Error;
use uuid::Uuid;

/// The main error type for collection operations.
///
/// This enum consolidates every error condition a caller can observe, from
/// input validation to storage failures. Validation errors are raised before
/// any entity is touched; storage errors are raised after the in-memory
/// mutation has already been applied (see [`crate::app::Coordinator`] for the
/// persistence contract).
///
/// # Examples
///
/// ```
/// use tangocho::domain::TangochoError;
///
/// fn reject_blank_name() -> Result<(), TangochoError> {
///     Err(TangochoError::Validation("folder name must not be blank".to_string()))
/// }
/// ```
#[derive(Debug, Error)]
pub enum TangochoError {
    /// A required text field was empty or blank.
    ///
    /// Raised synchronously before the operation mutates anything, so the
    /// entity graph is untouched when this surfaces. Also covers rejected
    /// reorders (moving folders while a search filter is active, indices out
    /// of bounds). The string describes which input was rejected.
    #[error("validation error: {0}")]
    Validation(String),

    /// An operation referenced an entity id that no longer exists.
    ///
    /// Raised by rename/update/toggle operations when the target was deleted
    /// out from under a stale caller. Deletions of missing entities are
    /// silent no-ops instead, so a double-delete from stale UI state never
    /// fails.
    #[error("entity not found: {0}")]
    NotFound(Uuid),

    /// Serialization or storage-backend failure during persistence.
    ///
    /// Occurs when encoding or decoding the stored document fails. The
    /// string contains a description of what went wrong. By the time this
    /// surfaces from a mutating operation, the in-memory change has already
    /// been applied and is NOT rolled back.
    #[error("storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically
    /// converts from `std::io::Error` using the `#[from]` attribute. Subject
    /// to the same no-rollback contract as [`TangochoError::Storage`].
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for collection operations.
///
/// This is a type alias for `std::result::Result<T, TangochoError>` that
/// simplifies function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, TangochoError>;
