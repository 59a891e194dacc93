// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! This module contains concrete implementations of the port traits defined in
//! `application::port`, plus the HTTP plumbing used for remote assets.
//!
//! # Available Adapters
//!
//! - [`library`]: Directory-backed photo library (implements [`PhotoLibrary`])
//! - [`remote`]: HTTP fetches for URL-backed assets
//!
//! [`PhotoLibrary`]: crate::application::port::PhotoLibrary

pub mod library;
pub mod remote;

pub use library::{FsPhotoLibrary, SUPPORTED_EXTENSIONS};
