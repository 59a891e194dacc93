// SPDX-License-Identifier: MPL-2.0
//! Photo and video viewer.
//!
//! [`component::State`] is the entry point. It lays out one of three
//! surfaces depending on what it displays:
//!
//! - a video surface when a video is bound and at most one photo is shown
//! - a single photo, fitted to the available space
//! - a grid of thumbnails with an optional selection mode
//!
//! A bar at the top holds close/edit/select controls, a bar at the bottom the
//! comment field and the save or remove button. An upload overlay covers
//! everything while the shared progress is set.

pub mod bottom_bar;
pub mod component;
pub mod config;
pub mod grid;
pub mod host;
pub mod photo_view;
pub mod subcomponents;
pub mod top_bar;
pub mod upload_overlay;
pub mod video_surface;

pub use component::{Effect, Message, State, ViewEnv};
pub use config::ViewerConfig;
pub use host::HostCallbacks;
