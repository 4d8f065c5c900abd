//! Task Form Component
//!
//! Form for creating new tasks. The store mutation is deferred briefly so
//! the button can show progress; unmounting the form cancels it.

use leptos::prelude::*;
use task_core::{FieldUpdate, FormIntake};

use crate::components::{field_update_from_event, PrioritySelector};
use crate::config::use_ui_config;
use crate::deferred::use_deferred_action;
use crate::store::{store_submit_form, use_app_store};

#[component]
pub fn TaskForm() -> impl IntoView {
    let store = use_app_store();
    let config = use_ui_config();
    let form = RwSignal::new(FormIntake::new());
    let deferred = use_deferred_action();

    let submitting = move || form.with(|f| f.is_submitting());

    let on_input = move |ev: web_sys::Event| {
        if let Some(update) = field_update_from_event(&ev) {
            form.update(|f| f.set(update));
        }
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(draft) = form.try_update(|f| f.begin_submit()).flatten() else {
            return;
        };
        web_sys::console::log_1(
            &format!("[FORM] Submitting '{}' ({})", draft.title, draft.priority).into(),
        );
        deferred.update_value(|d| {
            d.schedule(config.submit_delay_ms, move || {
                let created = form.try_update(|f| store_submit_form(&store, f, draft)).flatten();
                if let Some(id) = created {
                    web_sys::console::log_1(&format!("[FORM] Created task {}", id).into());
                }
            })
        });
    };

    view! {
        <section class="panel task-form-panel">
            <h2 class="panel-title">"Add New Task"</h2>
            <form class="task-form" on:submit=submit>
                <label class="field-label" for="title">"Title"</label>
                <input
                    id="title"
                    name="title"
                    type="text"
                    placeholder="What needs to be done?"
                    required=true
                    prop:value=move || form.with(|f| f.draft().title.clone())
                    on:input=on_input
                />

                <label class="field-label" for="description">"Description"</label>
                <textarea
                    id="description"
                    name="description"
                    rows="3"
                    placeholder="Add some details about this task..."
                    prop:value=move || form.with(|f| f.draft().description.clone())
                    on:input=on_input
                ></textarea>

                <label class="field-label">"Priority"</label>
                <PrioritySelector
                    current=Signal::derive(move || form.with(|f| f.draft().priority))
                    on_change=move |update: FieldUpdate| form.update(|f| f.set(update))
                />

                <button type="submit" class="submit-btn" disabled=submitting>
                    {move || if submitting() { "Adding Task..." } else { "Add Task" }}
                </button>
            </form>
        </section>
    }
}
