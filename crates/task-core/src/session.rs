//! Edit Session
//!
//! Tracks which task the modal is editing. Edits go to a working copy and
//! reach the store only on save.

use tracing::debug;

use crate::domain::Task;
use crate::field::FieldUpdate;
use crate::store::TaskStore;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditSession {
    /// No task selected, modal hidden
    #[default]
    Closed,
    /// Modal visible with a private copy of the task
    Editing { working: Task, saving: bool },
}

impl EditSession {
    pub fn open_for(&mut self, task: &Task) {
        debug!(id = %task.id, "edit session opened");
        *self = EditSession::Editing {
            working: task.clone(),
            saving: false,
        };
    }

    /// Apply a field edit to the working copy. Ignored when closed.
    pub fn edit(&mut self, update: FieldUpdate) {
        if let EditSession::Editing { working, .. } = self {
            working.apply(update);
        }
    }

    /// Discard the working copy
    pub fn cancel(&mut self) {
        if let EditSession::Editing { working, .. } = self {
            debug!(id = %working.id, "edit session cancelled");
        }
        *self = EditSession::Closed;
    }

    /// Mark a save as pending. Returns false when there is nothing to save,
    /// the working title is blank or a save is already pending.
    pub fn begin_save(&mut self) -> bool {
        match self {
            EditSession::Editing { working, saving } if !*saving && working.has_title() => {
                *saving = true;
                true
            }
            _ => false,
        }
    }

    /// Push the working copy into the store and close. A closed session is a
    /// no-op, so a save that fires after cancel changes nothing.
    pub fn save(&mut self, store: &mut TaskStore) -> bool {
        match std::mem::take(self) {
            EditSession::Editing { working, .. } => {
                let id = working.id;
                let updated = store.update(working);
                debug!(%id, updated, "edit session saved");
                updated
            }
            EditSession::Closed => false,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, EditSession::Editing { .. })
    }

    pub fn is_saving(&self) -> bool {
        matches!(self, EditSession::Editing { saving: true, .. })
    }

    pub fn working(&self) -> Option<&Task> {
        match self {
            EditSession::Editing { working, .. } => Some(working),
            EditSession::Closed => None,
        }
    }
}
