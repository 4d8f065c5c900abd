//! Priority Selector Component
//!
//! One button per priority level, named like the other form controls.

use leptos::prelude::*;
use task_core::{FieldUpdate, Priority, TaskField};

use crate::components::field_update_from_event;

/// Priority selector buttons
#[component]
pub fn PrioritySelector(
    current: Signal<Priority>,
    #[prop(into)] on_change: Callback<FieldUpdate>,
) -> impl IntoView {
    view! {
        <div class="priority-selector">
            {Priority::ALL.iter().map(|&priority| {
                let is_selected = move || current.get() == priority;
                view! {
                    <button
                        type="button"
                        name=TaskField::Priority.name()
                        value=priority.as_str()
                        class=move || {
                            if is_selected() {
                                format!("priority-btn {} active", priority.as_str())
                            } else {
                                format!("priority-btn {}", priority.as_str())
                            }
                        }
                        on:click=move |ev| {
                            if let Some(update) = field_update_from_event(&ev) {
                                on_change.run(update);
                            }
                        }
                    >
                        {priority.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
