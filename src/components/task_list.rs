//! Task List Component
//!
//! Renders the store's ordered tasks, or an empty-state placeholder.

use leptos::prelude::*;

use crate::components::TaskCard;
use crate::config::use_ui_config;
use crate::store::{store_task_counts, store_tasks, use_app_store};

#[component]
pub fn TaskList() -> impl IntoView {
    let store = use_app_store();
    let step_ms = use_ui_config().stagger_step_ms;

    let rows = move || store_tasks(&store).into_iter().enumerate().collect::<Vec<_>>();
    let is_empty = move || store_task_counts(&store).0 == 0;

    view! {
        <Show
            when=move || !is_empty()
            fallback=|| view! {
                <div class="empty-state">
                    <p class="empty-title">"No tasks yet"</p>
                    <p class="empty-hint">"Add one to get started!"</p>
                </div>
            }
        >
            <div class="task-list">
                <For
                    each=rows
                    // Key on every displayed field so edits re-render the card
                    key=|(index, task)| {
                        (
                            task.id,
                            *index,
                            task.title.clone(),
                            task.description.clone(),
                            task.priority,
                        )
                    }
                    children=move |(index, task)| {
                        let delay = index as u32 * step_ms;
                        view! {
                            <div class="task-row" style=format!("animation-delay: {}ms;", delay)>
                                <TaskCard task=task />
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
