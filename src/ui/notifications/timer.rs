// SPDX-License-Identifier: MPL-2.0
//! Cancellable delayed callbacks for the toast lifecycle.
//!
//! The queue never reads the clock itself: callers schedule against an
//! explicit deadline and drain due entries by passing the current instant.

use super::notification::ToastId;
use std::collections::{BTreeMap, HashMap};
use std::time::Instant;

/// Handle returned by [`TimerQueue::schedule`], used to cancel the timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerHandle(u64);

/// What should happen to a toast when its timer fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    /// The first frame after creation has been drawn.
    EntryComplete(ToastId),
    /// The display duration has elapsed.
    AutoDismiss(ToastId),
    /// The exit grace period has elapsed.
    Remove(ToastId),
}

impl TimerEvent {
    #[must_use]
    pub fn toast_id(self) -> ToastId {
        match self {
            TimerEvent::EntryComplete(id) | TimerEvent::AutoDismiss(id) | TimerEvent::Remove(id) => id,
        }
    }
}

/// Deadline-ordered set of pending timers.
///
/// Timers with equal deadlines fire in scheduling order.
#[derive(Debug, Default)]
pub struct TimerQueue {
    next_seq: u64,
    pending: BTreeMap<(Instant, u64), TimerEvent>,
    deadlines: HashMap<u64, Instant>,
}

impl TimerQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedules `event` to fire at `deadline`.
    pub fn schedule(&mut self, deadline: Instant, event: TimerEvent) -> TimerHandle {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.insert((deadline, seq), event);
        self.deadlines.insert(seq, deadline);
        TimerHandle(seq)
    }

    /// Cancels a pending timer.
    ///
    /// Returns `false` if the timer already fired or was cancelled before.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        match self.deadlines.remove(&handle.0) {
            Some(deadline) => self.pending.remove(&(deadline, handle.0)).is_some(),
            None => false,
        }
    }

    /// Removes and returns the earliest timer whose deadline is at or before `now`.
    ///
    /// The deadline is returned with the event so that late ticks can still
    /// date the transition at the moment it was due.
    pub fn pop_due(&mut self, now: Instant) -> Option<(Instant, TimerEvent)> {
        let (&(deadline, seq), _) = self.pending.first_key_value()?;
        if deadline > now {
            return None;
        }
        self.deadlines.remove(&seq);
        self.pending
            .remove(&(deadline, seq))
            .map(|event| (deadline, event))
    }

    /// Returns the deadline of the next timer to fire.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.keys().next().map(|&(deadline, _)| deadline)
    }

    /// Returns whether `handle` is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.deadlines.contains_key(&handle.0)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn id(seq: u64) -> ToastId {
        ToastId::from_sequence(seq)
    }

    #[test]
    fn nothing_fires_before_deadline() {
        let t0 = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(t0 + Duration::from_millis(100), TimerEvent::Remove(id(0)));

        assert!(queue.pop_due(t0 + Duration::from_millis(99)).is_none());
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn fires_in_deadline_order() {
        let t0 = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(t0 + Duration::from_millis(200), TimerEvent::Remove(id(1)));
        queue.schedule(t0 + Duration::from_millis(100), TimerEvent::Remove(id(0)));

        let later = t0 + Duration::from_secs(1);
        assert_eq!(queue.pop_due(later).map(|(_, e)| e), Some(TimerEvent::Remove(id(0))));
        assert_eq!(queue.pop_due(later).map(|(_, e)| e), Some(TimerEvent::Remove(id(1))));
        assert!(queue.pop_due(later).is_none());
    }

    #[test]
    fn equal_deadlines_fire_in_scheduling_order() {
        let t0 = Instant::now();
        let mut queue = TimerQueue::new();
        queue.schedule(t0, TimerEvent::AutoDismiss(id(3)));
        queue.schedule(t0, TimerEvent::AutoDismiss(id(1)));

        assert_eq!(queue.pop_due(t0).map(|(_, e)| e.toast_id()), Some(id(3)));
        assert_eq!(queue.pop_due(t0).map(|(_, e)| e.toast_id()), Some(id(1)));
    }

    #[test]
    fn cancelled_timer_never_fires() {
        let t0 = Instant::now();
        let mut queue = TimerQueue::new();
        let handle = queue.schedule(t0 + Duration::from_millis(10), TimerEvent::AutoDismiss(id(0)));

        assert!(queue.cancel(handle));
        assert!(!queue.is_pending(handle));
        assert!(queue.pop_due(t0 + Duration::from_secs(10)).is_none());
    }

    #[test]
    fn cancel_after_fire_reports_false() {
        let t0 = Instant::now();
        let mut queue = TimerQueue::new();
        let handle = queue.schedule(t0, TimerEvent::AutoDismiss(id(0)));

        assert!(queue.pop_due(t0).is_some());
        assert!(!queue.cancel(handle));
    }

    #[test]
    fn pop_due_returns_scheduled_deadline() {
        let t0 = Instant::now();
        let deadline = t0 + Duration::from_millis(40);
        let mut queue = TimerQueue::new();
        queue.schedule(deadline, TimerEvent::EntryComplete(id(0)));

        let (fired_at, _) = queue.pop_due(t0 + Duration::from_secs(5)).expect("timer is due");
        assert_eq!(fired_at, deadline);
        assert_eq!(queue.next_deadline(), None);
    }
}
