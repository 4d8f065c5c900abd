//! Form control events
//!
//! Maps events from named controls onto typed field updates.

use leptos::prelude::*;
use task_core::FieldUpdate;
use wasm_bindgen::JsCast;

/// Build a `FieldUpdate` from an input or click event. The control's `name`
/// attribute selects the field; unknown names are logged and ignored.
pub fn field_update_from_event(ev: &web_sys::Event) -> Option<FieldUpdate> {
    let element = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    let name = element.get_attribute("name")?;
    // Buttons carry a fixed value attribute; text controls have a live value
    let value = if element.tag_name().eq_ignore_ascii_case("button") {
        element.get_attribute("value").unwrap_or_default()
    } else {
        event_target_value(ev)
    };
    match FieldUpdate::parse(&name, &value) {
        Ok(update) => Some(update),
        Err(e) => {
            web_sys::console::warn_1(&format!("[FORM] Ignored input: {}", e).into());
            None
        }
    }
}
