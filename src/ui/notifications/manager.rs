// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Manager` owns the anchor region and every active toast. It runs the
//! show → auto-dismiss → remove protocol on top of a [`TimerQueue`], driven by
//! periodic [`Message::Tick`]s from the application's subscription.

use super::builder::ToastBuilder;
use super::instance::{ToastInstance, ToastState};
use super::notification::{Anchor, ToastConfig, ToastId};
use super::region::AnchorRegion;
use super::timer::{TimerEvent, TimerQueue};
use crate::config::{Config, ENTRY_FRAME_MS};
use crate::error::Result;
use std::time::{Duration, Instant};

/// Messages for toast state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// The close control of a toast was pressed.
    Close(ToastId),
    /// Dismiss every active toast.
    DismissAll,
    /// Tick for firing due timers.
    Tick(Instant),
}

/// Owns the anchor region and all toast instances.
#[derive(Debug)]
pub struct Manager {
    region: AnchorRegion,
    /// Active toasts in display order (newest last).
    active: Vec<ToastInstance>,
    timers: TimerQueue,
    next_seq: u64,
    exit_grace: Duration,
    defaults: ToastConfig,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Manager {
    /// Creates a manager; the region is not initialized until [`Manager::initialize`]
    /// or the first [`Manager::show`].
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let defaults = ToastConfig::default()
            .with_anchor(config.anchor())
            .with_duration_ms(config.duration_ms());
        Self {
            region: AnchorRegion::new(defaults.anchor, config.exit_grace()),
            active: Vec::new(),
            timers: TimerQueue::new(),
            next_seq: 0,
            exit_grace: config.exit_grace(),
            defaults,
        }
    }

    /// Creates the anchor region and its style rules. Idempotent.
    pub fn initialize(&mut self) {
        self.region.initialize();
    }

    /// Starts a fluent toast request seeded with this manager's defaults.
    pub fn build_toast(&mut self) -> ToastBuilder<'_> {
        let defaults = self.defaults.clone();
        ToastBuilder::new(self, defaults)
    }

    /// Moves the anchor region to `anchor`.
    ///
    /// Toasts already on screen follow the new layout but keep the slide
    /// direction committed when they were created.
    pub fn set_anchor(&mut self, anchor: Anchor) {
        if self.region.relocate(anchor) {
            tracing::info!(anchor = %anchor, "toast anchor changed");
        }
    }

    /// Parses and applies an anchor name, keeping the current anchor on failure.
    pub fn set_anchor_named(&mut self, name: &str) -> Result<()> {
        let anchor = name.parse::<Anchor>().inspect_err(|err| {
            tracing::warn!(error = %err, current = %self.region.anchor(), "anchor change rejected");
        })?;
        self.set_anchor(anchor);
        Ok(())
    }

    /// Shows a toast.
    ///
    /// Fails only with [`crate::error::Error::EmptyMessage`]; once the config is
    /// accepted the rest of the lifecycle cannot fail.
    pub fn show(&mut self, config: ToastConfig, now: Instant) -> Result<ToastId> {
        config.validate().inspect_err(|_| {
            tracing::warn!("rejected toast without message");
        })?;

        self.initialize();
        if config.anchor != self.region.anchor() {
            self.set_anchor(config.anchor);
        }

        let id = ToastId::from_sequence(self.next_seq);
        self.next_seq += 1;

        let slide = self.region.anchor().slide_direction();
        let mut instance = ToastInstance::new(id, config, slide, now);
        instance.entry_timer = Some(self.timers.schedule(
            now + Duration::from_millis(ENTRY_FRAME_MS),
            TimerEvent::EntryComplete(id),
        ));
        if let Some(delay) = instance.config().auto_dismiss() {
            instance.dismiss_timer = Some(self.timers.schedule(now + delay, TimerEvent::AutoDismiss(id)));
        }

        tracing::debug!(
            id = id.sequence(),
            severity = %instance.config().severity,
            anchor = %instance.config().anchor,
            duration_ms = instance.config().duration_ms,
            "toast shown"
        );
        self.active.push(instance);
        Ok(id)
    }

    /// Starts the exit of a toast.
    ///
    /// Returns `false` if the toast is unknown or already leaving; such calls
    /// have no effect.
    pub fn dismiss(&mut self, id: ToastId, now: Instant) -> bool {
        let Some(instance) = self.active.iter_mut().find(|t| t.id() == id) else {
            return false;
        };
        if !instance.state().is_dismissable() {
            return false;
        }

        if let Some(handle) = instance.dismiss_timer.take() {
            self.timers.cancel(handle);
        }
        if let Some(handle) = instance.entry_timer.take() {
            self.timers.cancel(handle);
        }
        instance.mark_dismissing(now);
        instance.removal_timer = Some(self.timers.schedule(now + self.exit_grace, TimerEvent::Remove(id)));

        tracing::debug!(id = id.sequence(), "toast dismissing");
        true
    }

    /// Dismisses every active toast. Toasts already leaving are left alone.
    ///
    /// Returns the number of toasts that started their exit.
    pub fn dismiss_all(&mut self, now: Instant) -> usize {
        let ids: Vec<ToastId> = self
            .active
            .iter()
            .filter(|t| t.state().is_dismissable())
            .map(ToastInstance::id)
            .collect();

        ids.into_iter().filter(|&id| self.dismiss(id, now)).count()
    }

    /// Fires every timer due at `now`, in deadline order.
    ///
    /// Returns the toasts removed during this tick.
    pub fn tick(&mut self, now: Instant) -> Vec<ToastId> {
        let mut removed = Vec::new();

        while let Some((due_at, event)) = self.timers.pop_due(now) {
            match event {
                TimerEvent::EntryComplete(id) => {
                    if let Some(instance) = self.instance_mut(id) {
                        instance.mark_visible();
                    }
                }
                TimerEvent::AutoDismiss(id) => {
                    if let Some(instance) = self.instance_mut(id) {
                        instance.dismiss_timer = None;
                    }
                    self.dismiss(id, due_at);
                }
                TimerEvent::Remove(id) => {
                    if let Some(pos) = self.active.iter().position(|t| t.id() == id) {
                        let mut instance = self.active.remove(pos);
                        instance.mark_removed();
                        tracing::debug!(id = id.sequence(), "toast removed");
                        removed.push(id);
                    }
                }
            }
        }

        removed
    }

    /// Handles a toast message at time `now`.
    pub fn handle_message(&mut self, message: &Message, now: Instant) {
        match message {
            Message::Close(id) => {
                self.dismiss(*id, now);
            }
            Message::DismissAll => {
                self.dismiss_all(now);
            }
            Message::Tick(instant) => {
                self.tick(*instant);
            }
        }
    }

    fn instance_mut(&mut self, id: ToastId) -> Option<&mut ToastInstance> {
        self.active.iter_mut().find(|t| t.id() == id)
    }

    /// Returns the active toasts in display order.
    pub fn active(&self) -> impl Iterator<Item = &ToastInstance> {
        self.active.iter()
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active.len()
    }

    #[must_use]
    pub fn has_toasts(&self) -> bool {
        !self.active.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: ToastId) -> Option<&ToastInstance> {
        self.active.iter().find(|t| t.id() == id)
    }

    /// Returns the state of a toast this manager created.
    ///
    /// Identifiers are never reused, so an issued id that is no longer active
    /// belongs to a removed toast.
    #[must_use]
    pub fn state_of(&self, id: ToastId) -> Option<ToastState> {
        match self.get(id) {
            Some(instance) => Some(instance.state()),
            None if id.sequence() < self.next_seq => Some(ToastState::Removed),
            None => None,
        }
    }

    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.region.anchor()
    }

    #[must_use]
    pub fn region(&self) -> &AnchorRegion {
        &self.region
    }

    #[must_use]
    pub fn exit_grace(&self) -> Duration {
        self.exit_grace
    }

    /// Number of timers waiting to fire.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Deadline of the next timer, useful to decide whether to keep ticking.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }
}
