//! Deferred Actions
//!
//! Cancellable one-shot timers for delayed store mutations.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// A single pending action, held as its timer handle. Replacing or
/// dropping the handle cancels the action.
pub struct DeferredAction<H = Timeout> {
    pending: Option<H>,
}

impl<H> Default for DeferredAction<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H> DeferredAction<H> {
    /// Hold a freshly started timer, cancelling the previous one
    pub fn replace(&mut self, handle: H) {
        self.pending = Some(handle);
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl DeferredAction<Timeout> {
    pub fn schedule(&mut self, delay_ms: u32, action: impl FnOnce() + 'static) {
        self.cancel();
        self.replace(Timeout::new(delay_ms, action));
    }
}

/// Create a component-scoped deferred action that is cancelled when the
/// owning component is torn down
pub fn use_deferred_action() -> StoredValue<DeferredAction, LocalStorage> {
    use_deferred()
}

fn use_deferred<H: 'static>() -> StoredValue<DeferredAction<H>, LocalStorage> {
    let deferred = StoredValue::new_local(DeferredAction::default());
    on_cleanup(move || {
        deferred.try_update_value(|d| d.cancel());
    });
    deferred
}
