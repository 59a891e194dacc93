// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support.
//!
//! This module provides localization capabilities using the Fluent localization system.
//! Translations are embedded from `assets/i18n/*.ftl` at build time.
//!
//! # Features
//!
//! - Locale resolution from CLI, config, or system settings
//! - Runtime language switching
//! - `MISSING: <key>` marker when a key has no translation

pub mod fluent;

pub use fluent::I18n;
