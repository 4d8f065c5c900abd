//! Form Intake
//!
//! Holds the new-task draft and submits it to the store. The submit can be
//! split into `begin_submit` and `finish_submit` so the caller may defer the
//! store mutation, or drop it with `cancel_submit`.

use tracing::debug;

use crate::domain::{TaskDraft, TaskId};
use crate::field::FieldUpdate;
use crate::store::TaskStore;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormIntake {
    draft: TaskDraft,
    submitting: bool,
}

impl FormIntake {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &TaskDraft {
        &self.draft
    }

    pub fn set(&mut self, update: FieldUpdate) {
        self.draft.apply(update);
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Validate and snapshot the draft. Declines blank titles and overlapping
    /// submits.
    pub fn begin_submit(&mut self) -> Option<TaskDraft> {
        if self.submitting {
            return None;
        }
        if !self.draft.has_title() {
            debug!("submit declined: blank title");
            return None;
        }
        self.submitting = true;
        Some(self.draft.clone())
    }

    /// Create the task and reset the form
    pub fn finish_submit(&mut self, store: &mut TaskStore, draft: TaskDraft) -> Option<TaskId> {
        self.submitting = false;
        let id = store.create(draft).ok()?;
        self.draft = TaskDraft::default();
        Some(id)
    }

    /// Drop a pending submit without touching the store
    pub fn cancel_submit(&mut self) {
        self.submitting = false;
    }

    /// Submit immediately
    pub fn submit(&mut self, store: &mut TaskStore) -> Option<TaskId> {
        let draft = self.begin_submit()?;
        self.finish_submit(store, draft)
    }
}
