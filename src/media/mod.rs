// SPDX-License-Identifier: MPL-2.0
//! Assets and the machinery that turns them into pixels.
//!
//! - [`asset`]: the host-owned [`Asset`] entity
//! - [`image`]: decoded [`ImageData`] and byte decoding
//! - [`loader`]: the [`AssetLoader`] with cancellation and failure memory

pub mod asset;
pub mod image;
pub mod loader;

pub use asset::{Asset, AssetSource};
pub use image::{decode_bytes, load_image, ImageData};
pub use loader::{AssetLoader, CancellationToken, Loaded, Resolution};
