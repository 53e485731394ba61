// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use crate::config::TICK_INTERVAL_MS;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Routes window resizes so the region can adapt its width.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(window::Event::Resized(size)) = event {
            return Some(Message::WindowResized(size));
        }
        None
    })
}

/// Creates a periodic tick subscription for toast timers and animations.
///
/// Only active while toasts are on screen.
pub fn create_tick_subscription(has_toasts: bool) -> Subscription<Message> {
    if has_toasts {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
