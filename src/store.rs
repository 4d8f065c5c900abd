//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Every mutation of
//! the task collection is routed through the helpers below, which call the
//! task-core operations.

use leptos::prelude::*;
use reactive_stores::Store;
use task_core::{EditSession, FieldUpdate, FormIntake, Priority, Task, TaskDraft, TaskId, TaskStore};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Priority-ordered tasks
    pub board: TaskStore,
    /// Task currently open in the edit modal
    pub session: EditSession,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Reads (tracked)
// ========================

/// Snapshot of the ordered task list
pub fn store_tasks(store: &AppStore) -> Vec<Task> {
    store.board().read().list().to_vec()
}

/// Total task count and per-priority counts
pub fn store_task_counts(store: &AppStore) -> (usize, Vec<(Priority, usize)>) {
    let board = store.board();
    let board = board.read();
    (board.len(), board.count_by_priority().to_vec())
}

/// Working copy of the task being edited
pub fn store_working_task(store: &AppStore) -> Option<Task> {
    store.session().read().working().cloned()
}

pub fn store_session_open(store: &AppStore) -> bool {
    store.session().read().is_open()
}

pub fn store_session_saving(store: &AppStore) -> bool {
    store.session().read().is_saving()
}

// ========================
// Task Store
// ========================

#[cfg(test)]
pub fn store_create_task(store: &AppStore, draft: TaskDraft) -> task_core::DomainResult<TaskId> {
    store.board().write().create(draft)
}

/// Finish a deferred form submit against the task store
pub fn store_submit_form(store: &AppStore, form: &mut FormIntake, draft: TaskDraft) -> Option<TaskId> {
    let board = store.board();
    let mut board = board.write();
    form.finish_submit(&mut board, draft)
}

#[cfg(test)]
pub fn store_update_task(store: &AppStore, task: Task) -> bool {
    store.board().write().update(task)
}

pub fn store_delete_task(store: &AppStore, task_id: TaskId) -> bool {
    store.board().write().delete(task_id)
}

// ========================
// Edit Session
// ========================

pub fn store_open_edit_session(store: &AppStore, task: &Task) {
    store.session().write().open_for(task);
}

pub fn store_edit_session(store: &AppStore, update: FieldUpdate) {
    store.session().write().edit(update);
}

pub fn store_cancel_edit_session(store: &AppStore) {
    store.session().write().cancel();
}

/// Mark the session as saving; false if closed or already saving
pub fn store_begin_save_edit_session(store: &AppStore) -> bool {
    store.session().write().begin_save()
}

/// Commit the working copy and close the session
pub fn store_save_edit_session(store: &AppStore) -> bool {
    let mut state = store.write();
    let AppState { board, session } = &mut *state;
    session.save(board)
}
