//! Task Board App
//!
//! Main application component: new-task form beside the ordered task list,
//! plus the edit modal.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{EditTaskModal, TaskForm, TaskList};
use crate::config::UiConfig;
use crate::store::{store_task_counts, AppState};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());

    // Provide state and config to all children
    provide_context(store);
    provide_context(UiConfig::default());

    Effect::new(move |_| {
        let (total, _) = store_task_counts(&store);
        web_sys::console::log_1(&format!("[APP] {} tasks", total).into());
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <h1>"Task Manager"</h1>
                <p class="app-subtitle">"Organize your tasks efficiently and stay productive"</p>
            </header>

            <div class="app-columns">
                <div class="form-column">
                    <TaskForm />
                </div>

                <section class="panel list-column">
                    <div class="list-header">
                        <h2 class="panel-title">"Your Tasks"</h2>
                        <div class="priority-counts">
                            {move || store_task_counts(&store).1.into_iter().map(|(priority, count)| view! {
                                <span class=format!("count-badge {}", priority.as_str())>
                                    {format!("{} {}", count, priority.label())}
                                </span>
                            }).collect_view()}
                        </div>
                    </div>
                    <TaskList />
                </section>
            </div>

            <EditTaskModal />
        </div>
    }
}
