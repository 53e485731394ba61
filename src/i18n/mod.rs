// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for toast titles and demo labels.
//!
//! This module provides localization capabilities using the Fluent localization system.
//!
//! # Features
//!
//! - Automatic locale detection from CLI, config, or system settings
//! - Embedded `.ftl` translation files
//! - Fallback marker when translations are missing

pub mod fluent;
