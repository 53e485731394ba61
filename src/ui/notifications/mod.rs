// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! Callers hand short messages to a single [`Manager`], which renders each one
//! as a dismissible toast in a screen corner and retires it after its display
//! duration or when the user closes it.
//!
//! # Components
//!
//! - [`notification`] - `ToastConfig`, `Severity` and `Anchor`
//! - [`builder`] - fluent `ToastBuilder` for requests
//! - [`manager`] - `Manager` running the show / dismiss / remove protocol
//! - [`region`] - the anchor region and its one-time layout rules
//! - [`instance`] - per-toast lifecycle state and animation
//! - [`timer`] - cancellable delayed callbacks
//! - [`toast`] - iced widgets rendering the region
//!
//! # Usage
//!
//! ```ignore
//! use iced_toasts::ui::notifications::{Manager, Severity};
//!
//! let mut manager = Manager::default();
//! manager.initialize();
//!
//! manager
//!     .build_toast()
//!     .message("Saved")
//!     .severity(Severity::Success)
//!     .show(Instant::now())?;
//!
//! // In your view function, render the region above the content
//! let overlay = Toast::view_overlay(&manager, &i18n, window_width, now).map(Message::Toast);
//! ```
//!
//! # Lifecycle
//!
//! `Entering → Visible → Dismissing → Removed`. A toast leaves `Visible`
//! either when its timer fires or when it is closed, whichever comes first;
//! closing cancels the timer. Removal follows after the exit grace period.

pub mod builder;
pub mod instance;
pub mod manager;
pub mod notification;
pub mod region;
pub mod timer;
pub mod toast;

pub use builder::ToastBuilder;
pub use instance::{ToastInstance, ToastState};
pub use manager::{Manager, Message as ToastMessage};
pub use notification::{Anchor, Severity, SlideDirection, ToastConfig, ToastId};
pub use region::{AnchorRegion, Placement, RegionStyle};
pub use toast::Toast;
