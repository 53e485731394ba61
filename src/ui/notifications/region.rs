// SPDX-License-Identifier: MPL-2.0
//! The on-screen anchor region that hosts every toast.
//!
//! There is exactly one region per window. It is created lazily by
//! [`AnchorRegion::initialize`], which also installs the shared layout and
//! animation rules. Later calls are no-ops, so those rules are never
//! installed twice.

use super::notification::Anchor;
use crate::config::{
    ENTRY_ANIMATION_MS, NARROW_BREAKPOINT, NARROW_WIDTH_RATIO, REGION_EDGE_OFFSET, REGION_GAP,
    REGION_MAX_WIDTH,
};
use iced::alignment;
use std::time::Duration;

/// Layout and animation rules shared by all toasts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionStyle {
    pub edge_offset: f32,
    pub gap: f32,
    pub max_width: f32,
    pub narrow_breakpoint: f32,
    pub narrow_width_ratio: f32,
    pub entry_animation: Duration,
    pub exit_animation: Duration,
}

impl RegionStyle {
    fn new(exit_animation: Duration) -> Self {
        Self {
            edge_offset: REGION_EDGE_OFFSET,
            gap: REGION_GAP,
            max_width: REGION_MAX_WIDTH,
            narrow_breakpoint: NARROW_BREAKPOINT,
            narrow_width_ratio: NARROW_WIDTH_RATIO,
            entry_animation: Duration::from_millis(ENTRY_ANIMATION_MS),
            exit_animation,
        }
    }

    /// Width of the region for a window of the given width.
    #[must_use]
    pub fn width_for(&self, window_width: f32) -> f32 {
        if window_width < self.narrow_breakpoint {
            window_width * self.narrow_width_ratio
        } else {
            self.max_width
        }
    }
}

/// Edge offsets of the region; exactly one vertical and one horizontal side is set.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Placement {
    pub top: Option<f32>,
    pub bottom: Option<f32>,
    pub left: Option<f32>,
    pub right: Option<f32>,
}

impl Placement {
    fn for_anchor(anchor: Anchor, offset: f32) -> Self {
        let (top, bottom) = if anchor.is_top() {
            (Some(offset), None)
        } else {
            (None, Some(offset))
        };
        let (left, right) = if anchor.is_left() {
            (Some(offset), None)
        } else {
            (None, Some(offset))
        };
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    #[must_use]
    pub fn align_x(&self) -> alignment::Horizontal {
        if self.left.is_some() {
            alignment::Horizontal::Left
        } else {
            alignment::Horizontal::Right
        }
    }

    #[must_use]
    pub fn align_y(&self) -> alignment::Vertical {
        if self.top.is_some() {
            alignment::Vertical::Top
        } else {
            alignment::Vertical::Bottom
        }
    }
}

/// Process-wide anchor state.
#[derive(Debug)]
pub struct AnchorRegion {
    anchor: Anchor,
    placement: Placement,
    exit_animation: Duration,
    style: Option<RegionStyle>,
    style_installs: u32,
}

impl AnchorRegion {
    pub(crate) fn new(anchor: Anchor, exit_animation: Duration) -> Self {
        Self {
            anchor,
            placement: Placement::for_anchor(anchor, REGION_EDGE_OFFSET),
            exit_animation,
            style: None,
            style_installs: 0,
        }
    }

    /// Creates the region's style rules on first call; later calls do nothing.
    ///
    /// Returns `true` if this call performed the initialization.
    pub fn initialize(&mut self) -> bool {
        if self.style.is_some() {
            return false;
        }
        let style = RegionStyle::new(self.exit_animation);
        self.placement = Placement::for_anchor(self.anchor, style.edge_offset);
        self.style = Some(style);
        self.style_installs += 1;
        tracing::debug!(anchor = %self.anchor, "toast region initialized");
        true
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.style.is_some()
    }

    /// Number of times the style rules were installed (0 or 1).
    #[must_use]
    pub fn style_installs(&self) -> u32 {
        self.style_installs
    }

    #[must_use]
    pub fn style(&self) -> Option<&RegionStyle> {
        self.style.as_ref()
    }

    #[must_use]
    pub fn anchor(&self) -> Anchor {
        self.anchor
    }

    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Moves the region to another corner.
    ///
    /// Returns `false` when `anchor` is already current.
    pub(crate) fn relocate(&mut self, anchor: Anchor) -> bool {
        if anchor == self.anchor {
            return false;
        }
        let offset = self.style.map_or(REGION_EDGE_OFFSET, |s| s.edge_offset);
        tracing::debug!(from = %self.anchor, to = %anchor, "toast region relocated");
        self.anchor = anchor;
        self.placement = Placement::for_anchor(anchor, offset);
        true
    }
}
