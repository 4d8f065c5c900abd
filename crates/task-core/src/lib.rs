//! Task Core
//!
//! Platform-independent task board logic: the ordered task store, the edit
//! session behind the modal and the new-task form intake.

pub mod domain;
pub mod field;
pub mod store;
pub mod session;
pub mod intake;

#[cfg(test)]
mod store_tests;

pub use domain::{DomainError, DomainResult, Priority, Task, TaskDraft, TaskId};
pub use field::{FieldUpdate, TaskField};
pub use store::TaskStore;
pub use session::EditSession;
pub use intake::FormIntake;
