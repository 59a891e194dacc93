// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core viewer types with no presentation dependencies.
//!
//! This module contains pure value objects and business rules for the
//! gallery. Nothing here knows about Iced, Tokio or the network.
//!
//! # Modules
//!
//! - [`asset`]: Displayable items ([`Asset`](asset::Asset), [`AssetId`](asset::AssetId),
//!   [`AssetSource`](asset::AssetSource), [`ImageQuality`](asset::ImageQuality))
//! - [`error`]: Domain error types ([`FetchError`](error::FetchError))
//! - [`media`]: Pixel data ([`RawImage`](media::RawImage)) and video references
//! - [`upload`]: Upload progress values ([`UploadProgress`](upload::UploadProgress),
//!   [`UploadPhase`](upload::UploadPhase))

pub mod asset;
pub mod error;
pub mod media;
pub mod upload;
