//! Task Card Component
//!
//! A single task with its priority badge and edit/delete actions.

use leptos::prelude::*;
use task_core::Task;

use crate::store::{store_delete_task, store_open_edit_session, use_app_store};

#[component]
pub fn TaskCard(task: Task) -> impl IntoView {
    let store = use_app_store();

    let id = task.id;
    let priority = task.priority;
    let description = if task.description.is_empty() {
        "No description provided".to_string()
    } else {
        task.description.clone()
    };
    let title = task.title.clone();

    view! {
        <div class=format!("task-card {}", priority.as_str())>
            <div class="task-card-header">
                <h3 class="task-title">{title}</h3>
                <span class=format!("priority-badge {}", priority.as_str())>{priority.label()}</span>
            </div>

            <p class="task-description">{description}</p>

            <div class="task-actions">
                <button class="edit-btn" on:click=move |_| store_open_edit_session(&store, &task)>
                    "Edit"
                </button>
                <button class="delete-btn" on:click=move |_| {
                    if store_delete_task(&store, id) {
                        web_sys::console::log_1(&format!("[LIST] Deleted task {}", id).into());
                    }
                }>
                    "Delete"
                </button>
            </div>
        </div>
    }
}
