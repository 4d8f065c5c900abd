//! UI Configuration
//!
//! Compiled-in timing knobs, provided to components via context.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct UiConfig {
    /// Delay before a submitted form or a saved edit reaches the store
    pub submit_delay_ms: u32,
    /// Per-row animation delay in the task list
    pub stagger_step_ms: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 300,
            stagger_step_ms: 50,
        }
    }
}

/// Get the UI config from context, falling back to defaults
pub fn use_ui_config() -> UiConfig {
    use_context::<UiConfig>().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = UiConfig::default();
        assert_eq!(config.submit_delay_ms, 300);
        assert_eq!(config.stagger_step_ms, 50);
    }
}
