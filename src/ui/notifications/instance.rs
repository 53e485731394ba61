// SPDX-License-Identifier: MPL-2.0
//! A single rendered toast and its lifecycle state.

use super::notification::{SlideDirection, ToastConfig, ToastId};
use super::timer::TimerHandle;
use std::time::{Duration, Instant};

/// Lifecycle state of a toast.
///
/// Transitions only move forward: `Entering → Visible → Dismissing → Removed`,
/// with `Entering → Dismissing` allowed when a toast is closed on its first frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastState {
    Entering,
    Visible,
    Dismissing,
    Removed,
}

impl ToastState {
    /// Whether a dismiss request would still have an effect.
    #[must_use]
    pub fn is_dismissable(self) -> bool {
        matches!(self, ToastState::Entering | ToastState::Visible)
    }
}

/// A toast owned by the manager.
#[derive(Debug, Clone)]
pub struct ToastInstance {
    id: ToastId,
    config: ToastConfig,
    state: ToastState,
    /// Committed at creation; later anchor changes do not alter it.
    slide: SlideDirection,
    created_at: Instant,
    dismissed_at: Option<Instant>,
    pub(crate) entry_timer: Option<TimerHandle>,
    pub(crate) dismiss_timer: Option<TimerHandle>,
    pub(crate) removal_timer: Option<TimerHandle>,
}

impl ToastInstance {
    pub(crate) fn new(
        id: ToastId,
        config: ToastConfig,
        slide: SlideDirection,
        created_at: Instant,
    ) -> Self {
        Self {
            id,
            config,
            state: ToastState::Entering,
            slide,
            created_at,
            dismissed_at: None,
            entry_timer: None,
            dismiss_timer: None,
            removal_timer: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> ToastId {
        self.id
    }

    #[must_use]
    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> ToastState {
        self.state
    }

    #[must_use]
    pub fn slide_direction(&self) -> SlideDirection {
        self.slide
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn dismissed_at(&self) -> Option<Instant> {
        self.dismissed_at
    }

    /// Whether an auto-dismiss timer is still armed for this toast.
    #[must_use]
    pub fn has_dismiss_timer(&self) -> bool {
        self.dismiss_timer.is_some()
    }

    pub(crate) fn mark_visible(&mut self) {
        if self.state == ToastState::Entering {
            self.state = ToastState::Visible;
        }
        self.entry_timer = None;
    }

    pub(crate) fn mark_dismissing(&mut self, at: Instant) {
        self.state = ToastState::Dismissing;
        self.dismissed_at = Some(at);
    }

    pub(crate) fn mark_removed(&mut self) {
        self.state = ToastState::Removed;
        self.removal_timer = None;
    }

    /// Remaining share of the display duration, from `1.0` down to `0.0`.
    ///
    /// Returns `None` for toasts that never auto-dismiss.
    #[must_use]
    pub fn remaining_fraction(&self, now: Instant) -> Option<f32> {
        let total = self.config.auto_dismiss()?;
        let end = self.dismissed_at.unwrap_or(now);
        let elapsed = end.saturating_duration_since(self.created_at);
        Some(1.0 - ratio(elapsed, total))
    }

    /// Horizontal displacement as a fraction of the toast width.
    ///
    /// `0.0` is resting position; `±1.0` is fully off-screen on the committed side.
    #[must_use]
    pub fn slide_offset(&self, now: Instant, entry: Duration, exit: Duration) -> f32 {
        let progress = match (self.state, self.dismissed_at) {
            (ToastState::Removed, _) => 1.0,
            (ToastState::Dismissing, Some(at)) => {
                // Exit continues from wherever the entry slide had reached.
                let start = self.entry_progress(at, entry);
                start + (1.0 - start) * ease_in(ratio(now.saturating_duration_since(at), exit))
            }
            _ => self.entry_progress(now, entry),
        };
        progress * self.slide.sign()
    }

    fn entry_progress(&self, at: Instant, entry: Duration) -> f32 {
        1.0 - ease_out(ratio(at.saturating_duration_since(self.created_at), entry))
    }

    /// Opacity paired with the slide animation.
    #[must_use]
    pub fn opacity(&self, now: Instant, entry: Duration, exit: Duration) -> f32 {
        1.0 - self.slide_offset(now, entry, exit).abs()
    }
}

fn ratio(elapsed: Duration, total: Duration) -> f32 {
    if total.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / total.as_secs_f32()).clamp(0.0, 1.0)
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

fn ease_in(t: f32) -> f32 {
    t * t
}
