// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all toast configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timing**: Display duration, exit grace period, animation lengths
//! - **Region layout**: Edge offsets, gap, width limits of the anchor region

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default display duration before auto-dismiss (in milliseconds).
pub const DEFAULT_DURATION_MS: u64 = 4000;

/// Duration value meaning "never auto-dismiss".
pub const NO_AUTO_DISMISS_MS: u64 = 0;

/// Delay between the start of the exit animation and removal (in milliseconds).
pub const DEFAULT_EXIT_GRACE_MS: u64 = 500;

/// Minimum configurable exit grace period (in milliseconds).
pub const MIN_EXIT_GRACE_MS: u64 = 50;

/// Maximum configurable exit grace period (in milliseconds).
pub const MAX_EXIT_GRACE_MS: u64 = 5000;

/// Length of the slide-in animation (in milliseconds).
pub const ENTRY_ANIMATION_MS: u64 = 500;

/// One rendered frame; entering toasts become visible after this delay.
pub const ENTRY_FRAME_MS: u64 = 16;

/// Interval of the tick subscription driving timers and animations.
pub const TICK_INTERVAL_MS: u64 = 16;

// ==========================================================================
// Region Layout Defaults
// ==========================================================================

/// Distance between the anchor region and the window edges (in pixels).
pub const REGION_EDGE_OFFSET: f32 = 20.0;

/// Vertical gap between stacked toasts (in pixels).
pub const REGION_GAP: f32 = 16.0;

/// Maximum width of the anchor region (in pixels).
pub const REGION_MAX_WIDTH: f32 = 400.0;

/// Window width below which the region uses a relative width.
pub const NARROW_BREAKPOINT: f32 = 768.0;

/// Fraction of the window width used by the region on narrow windows.
pub const NARROW_WIDTH_RATIO: f32 = 0.9;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_DURATION_MS > DEFAULT_EXIT_GRACE_MS);
    assert!(MIN_EXIT_GRACE_MS <= DEFAULT_EXIT_GRACE_MS);
    assert!(DEFAULT_EXIT_GRACE_MS <= MAX_EXIT_GRACE_MS);
    assert!(ENTRY_FRAME_MS < ENTRY_ANIMATION_MS);
    assert!(NARROW_WIDTH_RATIO > 0.0 && NARROW_WIDTH_RATIO <= 1.0);
    assert!(REGION_MAX_WIDTH < NARROW_BREAKPOINT);
};
