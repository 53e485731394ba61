// SPDX-License-Identifier: MPL-2.0
//! Fluent construction of toast requests.
//!
//! ```ignore
//! manager
//!     .build_toast()
//!     .message("Operation successful!")
//!     .severity(Severity::Success)
//!     .anchor(Anchor::BottomRight)
//!     .duration_ms(6000)
//!     .show(Instant::now())?;
//! ```

use super::manager::Manager;
use super::notification::{Anchor, Severity, ToastConfig, ToastId};
use crate::config::NO_AUTO_DISMISS_MS;
use crate::error::Result;
use std::time::Instant;

/// Accumulates a [`ToastConfig`] and hands it to the [`Manager`].
///
/// Setters never fail. The only required field, the message, is checked by
/// [`ToastBuilder::show`].
pub struct ToastBuilder<'a> {
    manager: &'a mut Manager,
    config: ToastConfig,
}

impl<'a> ToastBuilder<'a> {
    pub(crate) fn new(manager: &'a mut Manager, config: ToastConfig) -> Self {
        Self { manager, config }
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.config.message = message.into();
        self
    }

    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.config.severity = severity;
        self
    }

    /// Sets the severity by name; unknown names become [`Severity::Info`].
    #[must_use]
    pub fn severity_named(self, name: &str) -> Self {
        self.severity(Severity::parse_lenient(name))
    }

    #[must_use]
    pub fn anchor(mut self, anchor: Anchor) -> Self {
        self.config.anchor = anchor;
        self
    }

    /// Sets the display duration in milliseconds.
    ///
    /// Negative values are clamped to `0`, which keeps the toast until closed.
    #[must_use]
    pub fn duration_ms(mut self, duration_ms: i64) -> Self {
        self.config.duration_ms = u64::try_from(duration_ms).unwrap_or(NO_AUTO_DISMISS_MS);
        self
    }

    /// Returns the configuration accumulated so far.
    #[must_use]
    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    /// Shows a toast with the current configuration.
    ///
    /// May be called more than once; each call shows an independent toast
    /// from a snapshot of the configuration.
    pub fn show(&mut self, now: Instant) -> Result<ToastId> {
        self.config.validate()?;
        self.manager.show(self.config.clone(), now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::ui::notifications::ToastState;

    #[test]
    fn setters_chain_into_config() {
        let mut manager = Manager::default();
        let builder = manager
            .build_toast()
            .message("Operation successful!")
            .severity(Severity::Success)
            .anchor(Anchor::BottomRight)
            .duration_ms(6000);

        let config = builder.config();
        assert_eq!(config.message, "Operation successful!");
        assert_eq!(config.severity, Severity::Success);
        assert_eq!(config.anchor, Anchor::BottomRight);
        assert_eq!(config.duration_ms, 6000);
    }

    #[test]
    fn show_without_message_fails() {
        let mut manager = Manager::default();
        let result = manager.build_toast().severity(Severity::Error).show(Instant::now());

        assert_eq!(result, Err(Error::EmptyMessage));
        assert_eq!(manager.active_count(), 0);
    }

    #[test]
    fn negative_duration_is_clamped_to_zero() {
        let mut manager = Manager::default();
        let builder = manager.build_toast().message("x").duration_ms(-250);
        assert_eq!(builder.config().duration_ms, 0);
    }

    #[test]
    fn unknown_severity_name_defaults_to_info() {
        let mut manager = Manager::default();
        let builder = manager.build_toast().message("x").severity_named("fatal");
        assert_eq!(builder.config().severity, Severity::Info);
    }

    #[test]
    fn show_twice_creates_independent_toasts() {
        let t0 = Instant::now();
        let mut manager = Manager::default();
        let mut builder = manager.build_toast().message("twice");

        let first = builder.show(t0).expect("valid toast");
        let second = builder.show(t0).expect("valid toast");
        assert_ne!(first, second);

        manager.dismiss(first, t0);
        assert_eq!(manager.state_of(first), Some(ToastState::Dismissing));
        assert_eq!(manager.state_of(second), Some(ToastState::Entering));
        assert_eq!(manager.active_count(), 2);
    }
}
