// SPDX-License-Identifier: MPL-2.0
//! Decoded image bits ready for display.

use crate::domain::error::FetchError;
use crate::domain::media::RawImage;
use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::GenericImageView;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
    /// Original RGBA bytes.
    /// Stored in Arc to avoid expensive cloning.
    rgba_bytes: Arc<Vec<u8>>,
    /// Distinguishes two decodes of the same pixels.
    generation: u64,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    ///
    /// The pixels are stored in an Arc for shared ownership, and a copy is
    /// made for the Handle.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let rgba_bytes = Arc::new(pixels);
        let handle = image::Handle::from_rgba(width, height, rgba_bytes.to_vec());
        Self {
            handle,
            width,
            height,
            rgba_bytes,
            generation: next_generation(),
        }
    }

    /// Converts library output into displayable data.
    #[must_use]
    pub fn from_raw(raw: RawImage) -> Self {
        let (width, height) = (raw.width(), raw.height());
        Self::from_rgba(width, height, raw.into_rgba_bytes())
    }

    /// Returns a reference to the original RGBA bytes.
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Identifier of this particular decode.
    ///
    /// Every constructor call yields a new generation; clones share it. Two
    /// values with different generations were produced separately, which is
    /// how the viewer notices that a host replaced an image.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

fn next_generation() -> u64 {
    static GENERATION: AtomicU64 = AtomicU64::new(1);
    GENERATION.fetch_add(1, Ordering::Relaxed)
}

/// Decodes an encoded buffer (PNG, JPEG, WebP...) into raw RGBA pixels.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] if the format is unknown or the data is
/// corrupt.
pub fn decode_bytes(bytes: &[u8]) -> std::result::Result<RawImage, FetchError> {
    let img = image_rs::load_from_memory(bytes).map_err(|e| FetchError::Decode(e.to_string()))?;
    let (width, height) = img.dimensions();
    Ok(RawImage::from_rgba(width, height, img.to_rgba8().into_vec()))
}

/// Load an image from the given path and return its data.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read ([`Error::Io`])
/// - The image format is invalid or unsupported ([`Error::Fetch`])
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<ImageData> {
    let bytes = fs::read(path.as_ref())?;
    let raw = decode_bytes(&bytes).map_err(Error::Fetch)?;
    Ok(ImageData::from_raw(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    #[test]
    fn load_png_image_returns_expected_dimensions() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let image_path = temp_dir.path().join("sample.png");

        let image = RgbaImage::from_pixel(4, 2, Rgba([255, 0, 0, 255]));
        image
            .save(&image_path)
            .expect("failed to write temporary png");

        let data = load_image(&image_path).expect("png should load successfully");
        assert_eq!(data.width, 4);
        assert_eq!(data.height, 2);
        assert_eq!(data.rgba_bytes().len(), 4 * 2 * 4);
    }

    #[test]
    fn load_missing_image_returns_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let missing_path = temp_dir.path().join("does_not_exist.png");

        match load_image(&missing_path) {
            Err(Error::Io(_)) => {}
            other => panic!("expected Io error, got {other:?}"),
        }
    }

    #[test]
    fn load_invalid_png_bytes_returns_decode_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let bad_path = temp_dir.path().join("invalid.png");
        fs::write(&bad_path, b"not a png").expect("failed to write invalid data");

        match load_image(&bad_path) {
            Err(Error::Fetch(FetchError::Decode(message))) => assert!(!message.is_empty()),
            other => panic!("expected decode error for invalid png, got {other:?}"),
        }
    }

    #[test]
    fn clones_share_generation_but_decodes_do_not() {
        let a = ImageData::from_rgba(1, 1, vec![0, 0, 0, 255]);
        let b = ImageData::from_rgba(1, 1, vec![0, 0, 0, 255]);
        assert_eq!(a.generation(), a.clone().generation());
        assert_ne!(a.generation(), b.generation());
    }

    #[test]
    fn from_raw_keeps_dimensions() {
        let raw = RawImage::from_rgba(3, 2, vec![7u8; 3 * 2 * 4]);
        let data = ImageData::from_raw(raw);
        assert_eq!((data.width, data.height), (3, 2));
    }
}
