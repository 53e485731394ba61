// SPDX-License-Identifier: MPL-2.0
//! Core toast data structures.
//!
//! This module defines the `ToastConfig` value handed to the manager, together
//! with the `Severity` and `Anchor` enums it is made of.

use crate::config::{DEFAULT_DURATION_MS, NO_AUTO_DISMISS_MS};
use crate::error::{Error, Result};
use crate::ui::design_tokens::palette;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Unique identifier for a toast instance.
///
/// Identifiers are assigned by the manager in creation order and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastId(u64);

impl ToastId {
    pub(crate) fn from_sequence(seq: u64) -> Self {
        Self(seq)
    }

    /// Returns the creation sequence number.
    #[must_use]
    pub fn sequence(self) -> u64 {
        self.0
    }
}

/// Severity level determines the accent color, icon and title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum Severity {
    /// Operation completed successfully (green).
    Success,
    /// Error requiring attention (red).
    Error,
    /// Warning that doesn't block operation (orange).
    Warning,
    /// Informational message (blue).
    #[default]
    Info,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Success,
        Severity::Error,
        Severity::Warning,
        Severity::Info,
    ];

    /// Parses a severity name, substituting `Info` for anything unrecognized.
    ///
    /// Severity is cosmetic, so a bad value never prevents a toast from showing.
    #[must_use]
    pub fn parse_lenient(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            "info" => Severity::Info,
            other => {
                tracing::debug!(severity = other, "unknown severity, falling back to info");
                Severity::Info
            }
        }
    }

    /// Returns the lowercase name used by callers and style classes.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns the i18n key of the toast title.
    #[must_use]
    pub fn title_key(self) -> &'static str {
        match self {
            Severity::Success => "toast-title-success",
            Severity::Error => "toast-title-error",
            Severity::Warning => "toast-title-warning",
            Severity::Info => "toast-title-info",
        }
    }

    /// Returns the glyph drawn in the toast icon badge.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Success => "✔",
            Severity::Error => "!",
            Severity::Warning => "⚠",
            Severity::Info => "i",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Horizontal side a toast slides in from and out to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideDirection {
    Left,
    Right,
}

impl SlideDirection {
    /// Sign applied to the horizontal offset while off-screen.
    #[must_use]
    pub fn sign(self) -> f32 {
        match self {
            SlideDirection::Left => -1.0,
            SlideDirection::Right => 1.0,
        }
    }
}

/// Screen corner where toasts stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Anchor {
    pub const ALL: [Anchor; 4] = [
        Anchor::TopLeft,
        Anchor::TopRight,
        Anchor::BottomLeft,
        Anchor::BottomRight,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Anchor::TopLeft => "top-left",
            Anchor::TopRight => "top-right",
            Anchor::BottomLeft => "bottom-left",
            Anchor::BottomRight => "bottom-right",
        }
    }

    #[must_use]
    pub fn is_top(self) -> bool {
        matches!(self, Anchor::TopLeft | Anchor::TopRight)
    }

    #[must_use]
    pub fn is_left(self) -> bool {
        matches!(self, Anchor::TopLeft | Anchor::BottomLeft)
    }

    /// Corners on the same side share one horizontal slide direction.
    #[must_use]
    pub fn slide_direction(self) -> SlideDirection {
        if self.is_left() {
            SlideDirection::Left
        } else {
            SlideDirection::Right
        }
    }
}

impl FromStr for Anchor {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "top-left" => Ok(Anchor::TopLeft),
            "top-right" => Ok(Anchor::TopRight),
            "bottom-left" => Ok(Anchor::BottomLeft),
            "bottom-right" => Ok(Anchor::BottomRight),
            _ => Err(Error::InvalidAnchor(value.to_string())),
        }
    }
}

impl fmt::Display for Anchor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to show one toast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastConfig {
    pub message: String,
    pub severity: Severity,
    pub anchor: Anchor,
    /// Display time before auto-dismiss; `0` never auto-dismisses.
    pub duration_ms: u64,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            message: String::new(),
            severity: Severity::default(),
            anchor: Anchor::default(),
            duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

impl ToastConfig {
    /// Creates a config with the given message and default fields.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    #[must_use]
    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Returns the auto-dismiss delay, or `None` when the toast stays until closed.
    #[must_use]
    pub fn auto_dismiss(&self) -> Option<Duration> {
        (self.duration_ms != NO_AUTO_DISMISS_MS).then(|| Duration::from_millis(self.duration_ms))
    }

    /// Rejects configs whose message would render as an empty toast.
    pub fn validate(&self) -> Result<()> {
        if self.message.trim().is_empty() {
            return Err(Error::EmptyMessage);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_colors_are_distinct() {
        let colors: Vec<Color> = Severity::ALL.iter().map(|s| s.color()).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_severity_falls_back_to_info() {
        assert_eq!(Severity::parse_lenient("catastrophic"), Severity::Info);
        assert_eq!(Severity::parse_lenient(""), Severity::Info);
    }

    #[test]
    fn severity_parsing_ignores_case_and_whitespace() {
        assert_eq!(Severity::parse_lenient(" Success "), Severity::Success);
        assert_eq!(Severity::parse_lenient("ERROR"), Severity::Error);
        assert_eq!(Severity::parse_lenient("warning"), Severity::Warning);
    }

    #[test]
    fn anchor_parses_all_corners() {
        for anchor in Anchor::ALL {
            assert_eq!(anchor.as_str().parse::<Anchor>(), Ok(anchor));
        }
    }

    #[test]
    fn anchor_rejects_unknown_value() {
        assert_eq!(
            "center".parse::<Anchor>(),
            Err(Error::InvalidAnchor("center".to_string()))
        );
    }

    #[test]
    fn slide_direction_follows_horizontal_side() {
        assert_eq!(Anchor::TopLeft.slide_direction(), SlideDirection::Left);
        assert_eq!(Anchor::BottomLeft.slide_direction(), SlideDirection::Left);
        assert_eq!(Anchor::TopRight.slide_direction(), SlideDirection::Right);
        assert_eq!(Anchor::BottomRight.slide_direction(), SlideDirection::Right);
    }

    #[test]
    fn config_defaults_match_documented_values() {
        let config = ToastConfig::new("Saved");
        assert_eq!(config.severity, Severity::Info);
        assert_eq!(config.anchor, Anchor::TopRight);
        assert_eq!(config.duration_ms, 4000);
    }

    #[test]
    fn zero_duration_never_auto_dismisses() {
        let config = ToastConfig::new("Pinned").with_duration_ms(0);
        assert!(config.auto_dismiss().is_none());
    }

    #[test]
    fn validate_rejects_blank_messages() {
        assert_eq!(ToastConfig::new("").validate(), Err(Error::EmptyMessage));
        assert_eq!(ToastConfig::new("   ").validate(), Err(Error::EmptyMessage));
        assert!(ToastConfig::new("ok").validate().is_ok());
    }
}
