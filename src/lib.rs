// SPDX-License-Identifier: MPL-2.0
//! `iced_gallery` is a reusable photo and video viewer built with the Iced GUI framework.
//!
//! The viewer shows one photo, a grid of photos or a video, lets the user
//! select and remove grid items, edit a comment, and request an edit of the
//! displayed photo. A shared upload progress value drives an overlay that
//! dismisses the viewer once the upload completes.
//!
//! The [`app`] module contains a small host application used by the binary.

#![doc(html_root_url = "https://docs.rs/iced_gallery/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod media;
pub mod ui;
