//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is recoverable at the boundary: operations return it as a
/// value and leave the inventory exactly as it was before the call. The
/// presentation layer decides how to surface it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A supplied value failed a validation constraint.
    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// An item with the same name is already stored.
    #[error("item already exists: {0}")]
    DuplicateName(String),

    /// No item with the requested name is stored.
    #[error("item not found: {0}")]
    NotFound(String),

    /// The operation needs at least one item.
    #[error("inventory is empty")]
    Empty,

    /// Sorting was requested with fewer items than it requires.
    #[error("not enough items to sort (required: {required}, actual: {actual})")]
    InsufficientItems { required: usize, actual: usize },

    /// The backing storage could not be grown.
    #[error("failed to allocate storage for {requested} items")]
    AllocationFailure { requested: usize },
}

impl DomainError {
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName(name.into())
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound(name.into())
    }

    pub fn allocation_failure(requested: usize) -> Self {
        Self::AllocationFailure { requested }
    }

    /// Whether the caller should stop rather than continue its loop.
    ///
    /// Only storage exhaustion qualifies: without storage no further progress
    /// can be guaranteed.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::AllocationFailure { .. })
    }
}
