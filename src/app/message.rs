// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::ui::notifications::{self, Anchor, Severity};
use iced::Size;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Forwarded to the toast manager.
    Toast(notifications::ToastMessage),
    /// Show a sample toast of the given severity.
    Show(Severity),
    /// Show a sample toast that never auto-dismisses.
    ShowPinned,
    /// Move the anchor region to another corner.
    SelectAnchor(Anchor),
    /// Periodic tick driving toast timers and animations.
    Tick(Instant),
    WindowResized(Size),
}

/// Runtime flags passed from the command line to the application.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override (e.g. `fr`).
    pub lang: Option<String>,
    /// Optional anchor name (`top-left`, `top-right`, `bottom-left`, `bottom-right`).
    pub anchor: Option<String>,
    /// Optional display duration in milliseconds; negative means "until closed".
    pub duration_ms: Option<i64>,
}
