//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Ticking the inventory is infallible, so this stays small: it only covers
/// lookups against a batch that can miss.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// No item lives at the requested position of the batch.
    #[error("item not found at index {index} (len {len})")]
    NotFound { index: usize, len: usize },
}

impl DomainError {
    pub fn not_found(index: usize, len: usize) -> Self {
        Self::NotFound { index, len }
    }
}
