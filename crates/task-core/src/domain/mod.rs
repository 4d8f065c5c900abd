//! Domain Layer
//!
//! Task entity, priority ordering and the domain error type.
//! No browser dependencies live here.

mod error;
mod priority;
mod task;

pub use error::{DomainError, DomainResult};
pub use priority::Priority;
pub use task::{Task, TaskDraft, TaskId};
