//! Field Updates
//!
//! Tagged per-field edits for drafts and working copies. Form controls are
//! identified by name, so names are validated against the known field set
//! instead of being spread onto the record.

use std::str::FromStr;

use crate::domain::{DomainError, DomainResult, Priority, Task, TaskDraft};

/// Editable task fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskField {
    Title,
    Description,
    Priority,
}

impl TaskField {
    /// Name of the matching form control
    pub fn name(&self) -> &'static str {
        match self {
            TaskField::Title => "title",
            TaskField::Description => "description",
            TaskField::Priority => "priority",
        }
    }
}

impl FromStr for TaskField {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(TaskField::Title),
            "description" => Ok(TaskField::Description),
            "priority" => Ok(TaskField::Priority),
            other => Err(DomainError::UnknownField(other.to_string())),
        }
    }
}

/// A single field edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Title(String),
    Description(String),
    Priority(Priority),
}

impl FieldUpdate {
    /// Build an update from a control name and its raw value
    pub fn parse(name: &str, value: &str) -> DomainResult<Self> {
        Ok(match name.parse::<TaskField>()? {
            TaskField::Title => FieldUpdate::Title(value.to_string()),
            TaskField::Description => FieldUpdate::Description(value.to_string()),
            TaskField::Priority => FieldUpdate::Priority(value.parse()?),
        })
    }
}

impl TaskDraft {
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Title(title) => self.title = title,
            FieldUpdate::Description(description) => self.description = description,
            FieldUpdate::Priority(priority) => self.priority = priority,
        }
    }
}

impl Task {
    /// Apply an edit; the id is never touched
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Title(title) => self.title = title,
            FieldUpdate::Description(description) => self.description = description,
            FieldUpdate::Priority(priority) => self.priority = priority,
        }
    }
}
