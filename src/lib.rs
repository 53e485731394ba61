// SPDX-License-Identifier: MPL-2.0
//! `iced_toasts` is a transient on-screen notification manager for iced
//! applications.
//!
//! Callers hand short messages to one [`ui::notifications::Manager`], which
//! shows each as a dismissible toast in a screen corner and retires it after
//! a configurable interval or when the user closes it.

pub mod app;
pub mod config;
pub mod error;
pub mod i18n;
pub mod ui;
