//! UI Components
//!
//! Reusable Leptos components.

mod field_event;
mod priority_selector;
mod task_form;
mod task_card;
mod task_list;
mod edit_task_modal;

pub use field_event::field_update_from_event;
pub use priority_selector::PrioritySelector;
pub use task_form::TaskForm;
pub use task_card::TaskCard;
pub use task_list::TaskList;
pub use edit_task_modal::EditTaskModal;
