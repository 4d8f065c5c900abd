//! Task Store
//!
//! Owns the authoritative, priority-ordered task collection. Every mutation
//! goes through `create`, `update` or `delete`.

use tracing::{debug, warn};

use crate::domain::{DomainError, DomainResult, Priority, Task, TaskDraft, TaskId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a task from a draft and return its fresh id
    pub fn create(&mut self, draft: TaskDraft) -> DomainResult<TaskId> {
        if !draft.has_title() {
            warn!("rejected task with blank title");
            return Err(DomainError::EmptyTitle);
        }

        let id = self.allocate_id();
        self.tasks.push(Task::from_draft(id, draft));
        self.sort();
        debug!(%id, count = self.tasks.len(), "task created");
        Ok(id)
    }

    /// Replace the task with the same id. Returns false when no task matched
    /// or the replacement has a blank title.
    pub fn update(&mut self, task: Task) -> bool {
        if !task.has_title() {
            warn!(id = %task.id, "rejected update with blank title");
            return false;
        }

        let Some(slot) = self.tasks.iter_mut().find(|t| t.id == task.id) else {
            debug!(id = %task.id, "update ignored: {}", DomainError::NotFound(task.id));
            return false;
        };
        let id = task.id;
        *slot = task;
        self.sort();
        debug!(%id, "task updated");
        true
    }

    /// Remove the task with the given id. Returns false when absent.
    pub fn delete(&mut self, id: TaskId) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        let removed = self.tasks.len() != before;
        if removed {
            debug!(%id, count = self.tasks.len(), "task deleted");
        } else {
            debug!(%id, "delete ignored: {}", DomainError::NotFound(id));
        }
        removed
    }

    /// Current tasks, ordered High, Medium, Low
    pub fn list(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Task counts per priority, in `Priority::ALL` order
    pub fn count_by_priority(&self) -> [(Priority, usize); 3] {
        Priority::ALL.map(|p| (p, self.tasks.iter().filter(|t| t.priority == p).count()))
    }

    fn allocate_id(&mut self) -> TaskId {
        let id = TaskId::new(self.next_id);
        self.next_id += 1;
        id
    }

    // Stable: equal priorities keep their relative order.
    fn sort(&mut self) {
        self.tasks.sort_by_key(|t| t.priority.rank());
    }
}
