//! Domain Errors

use thiserror::Error;

use super::TaskId;

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level errors
///
/// None of these are fatal. The view layer absorbs them by declining the
/// action that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invalid input: task title must not be empty")]
    EmptyTitle,
    #[error("Not found: task {0}")]
    NotFound(TaskId),
    #[error("Invalid input: unknown task field '{0}'")]
    UnknownField(String),
    #[error("Invalid input: unknown priority '{0}'")]
    InvalidPriority(String),
}
