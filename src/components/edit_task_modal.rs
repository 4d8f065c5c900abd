//! Edit Task Modal
//!
//! Modal editor bound to the edit session. Field edits only touch the
//! session's working copy; the store changes when the deferred save fires.

use leptos::prelude::*;
use task_core::FieldUpdate;

use crate::components::{field_update_from_event, PrioritySelector};
use crate::config::use_ui_config;
use crate::deferred::use_deferred_action;
use crate::store::{
    store_begin_save_edit_session, store_cancel_edit_session, store_edit_session,
    store_save_edit_session, store_session_open, store_session_saving, store_working_task,
    use_app_store,
};

#[component]
pub fn EditTaskModal() -> impl IntoView {
    let store = use_app_store();
    let config = use_ui_config();
    let deferred = use_deferred_action();

    let saving = move || store_session_saving(&store);

    // Closing drops any pending save along with the working copy
    let close = move || {
        deferred.update_value(|d| d.cancel());
        store_cancel_edit_session(&store);
    };

    let on_input = move |ev: web_sys::Event| {
        if let Some(update) = field_update_from_event(&ev) {
            store_edit_session(&store, update);
        }
    };

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if !store_begin_save_edit_session(&store) {
            return;
        }
        deferred.update_value(|d| {
            d.schedule(config.submit_delay_ms, move || {
                let saved = store_save_edit_session(&store);
                web_sys::console::log_1(&format!("[MODAL] Saved edit, updated={}", saved).into());
            })
        });
    };

    view! {
        <Show when=move || store_session_open(&store)>
            <div class="modal-backdrop">
                <div class="modal">
                    <div class="modal-header">
                        <span class="modal-title">"Edit Task"</span>
                        <button type="button" class="close-btn" on:click=move |_| close()>"×"</button>
                    </div>

                    <form class="modal-body" on:submit=save>
                        <label class="field-label" for="edit-title">"Title"</label>
                        <input
                            id="edit-title"
                            name="title"
                            type="text"
                            required=true
                            prop:value=move || store_working_task(&store).map(|t| t.title).unwrap_or_default()
                            on:input=on_input
                        />

                        <label class="field-label" for="edit-description">"Description"</label>
                        <textarea
                            id="edit-description"
                            name="description"
                            rows="3"
                            prop:value=move || store_working_task(&store).map(|t| t.description).unwrap_or_default()
                            on:input=on_input
                        ></textarea>

                        <label class="field-label">"Priority"</label>
                        <PrioritySelector
                            current=Signal::derive(move || {
                                store_working_task(&store).map(|t| t.priority).unwrap_or_default()
                            })
                            on_change=move |update: FieldUpdate| store_edit_session(&store, update)
                        />

                        <div class="modal-actions">
                            <button type="button" class="cancel-btn" on:click=move |_| close()>
                                "Cancel"
                            </button>
                            <button type="submit" class="save-btn" disabled=saving>
                                {move || if saving() { "Saving..." } else { "Save Changes" }}
                            </button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
