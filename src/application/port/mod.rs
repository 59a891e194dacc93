// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! # Available Ports
//!
//! - [`library`]: System photo library access
//!
//! # Design Notes
//!
//! - Traits use domain types only (no Iced handles, no HTTP types)
//! - Traits are `Send + Sync` so adapters can be shared with background tasks
//! - No `async fn` - callers wrap calls in Iced `Task`s

pub mod library;

pub use library::{DeliveryMode, ImageRequest, PhotoLibrary, SharedPhotoLibrary};
