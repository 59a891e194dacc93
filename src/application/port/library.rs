// SPDX-License-Identifier: MPL-2.0
//! Photo library port definition.
//!
//! This module defines the [`PhotoLibrary`] trait used by the asset loader to
//! resolve [`LibraryRef`]s. Platforms plug their photo store in here; the
//! crate ships a filesystem adapter in
//! [`infrastructure::library`](crate::infrastructure::library).

use crate::domain::asset::LibraryRef;
use crate::domain::error::FetchError;
use crate::domain::media::RawImage;
use std::sync::Arc;

/// How the library should trade speed for fidelity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryMode {
    /// Return something quickly, even if degraded.
    Fast,
    /// Return the best available rendition.
    HighQuality,
}

/// A single image request against the library.
///
/// The library fits the result inside the target size, keeping the aspect
/// ratio. Items smaller than the target are returned as they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRequest {
    pub target_width: u32,
    pub target_height: u32,
    /// Speed/fidelity trade-off.
    pub delivery: DeliveryMode,
}

impl ImageRequest {
    /// Grid thumbnail: fast delivery at the cell size.
    #[must_use]
    pub fn thumbnail(width: u32, height: u32) -> Self {
        Self {
            target_width: width,
            target_height: height,
            delivery: DeliveryMode::Fast,
        }
    }

    /// Full image: highest fidelity at the item's native pixel dimensions,
    /// as reported by [`PhotoLibrary::pixel_size`].
    #[must_use]
    pub fn native((width, height): (u32, u32)) -> Self {
        Self {
            target_width: width,
            target_height: height,
            delivery: DeliveryMode::HighQuality,
        }
    }
}

/// Port for reading images out of a system photo library.
///
/// Calls are synchronous and may block; the loader runs them inside a
/// background `Task`.
///
/// # Example
///
/// ```ignore
/// use iced_gallery::application::port::{ImageRequest, PhotoLibrary};
/// use iced_gallery::domain::asset::LibraryRef;
///
/// fn preview(library: &impl PhotoLibrary, reference: &LibraryRef) {
///     let request = ImageRequest::thumbnail(150, 150);
///     match library.request_image(reference, request) {
///         Ok(raw) => println!("{}x{}", raw.width(), raw.height()),
///         Err(e) => eprintln!("Failed to load: {e}"),
///     }
/// }
/// ```
pub trait PhotoLibrary: Send + Sync {
    /// Produces the pixels for `reference`.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the item does not exist or cannot be decoded.
    fn request_image(
        &self,
        reference: &LibraryRef,
        request: ImageRequest,
    ) -> Result<RawImage, FetchError>;

    /// Native pixel dimensions of the item, without decoding it fully.
    ///
    /// The loader sizes full-quality requests with it.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the item does not exist or has an unreadable header.
    fn pixel_size(&self, reference: &LibraryRef) -> Result<(u32, u32), FetchError>;
}

/// Shared handle to a library implementation.
pub type SharedPhotoLibrary = Arc<dyn PhotoLibrary>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thumbnail_requests_are_fast() {
        let request = ImageRequest::thumbnail(150, 100);
        assert_eq!(request.delivery, DeliveryMode::Fast);
        assert_eq!((request.target_width, request.target_height), (150, 100));
    }

    #[test]
    fn native_requests_are_high_quality() {
        let request = ImageRequest::native((4032, 3024));
        assert_eq!(request.delivery, DeliveryMode::HighQuality);
        assert_eq!((request.target_width, request.target_height), (4032, 3024));
    }
}
