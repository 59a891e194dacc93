// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! - [`viewer`] - Photo/video viewer with grid selection and upload overlay
//! - [`widgets`] - Custom canvas widgets (spinner, progress ring)
//! - [`styles`] - Centralized styling (buttons, containers, overlays)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod styles;
pub mod theming;
pub mod viewer;
pub mod widgets;
