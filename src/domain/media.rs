// SPDX-License-Identifier: MPL-2.0
//! Core media types for the domain layer.
//!
//! These types represent pure data without any presentation dependencies.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Raw image data without presentation dependencies.
///
/// This is what the photo library port hands back. The presentation layer
/// converts it to a framework-specific handle.
///
/// # Example
///
/// ```
/// use iced_gallery::domain::media::RawImage;
///
/// let image = RawImage::from_rgba(4, 2, vec![255u8; 4 * 2 * 4]);
/// assert_eq!(image.width(), 4);
/// assert_eq!(image.height(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RawImage {
    width: u32,
    height: u32,
    /// RGBA pixel data (4 bytes per pixel).
    rgba_bytes: Arc<Vec<u8>>,
}

impl RawImage {
    /// Creates a new `RawImage` from dimensions and owned RGBA pixel data.
    ///
    /// # Panics
    ///
    /// Panics if the pixel data length doesn't match `width * height * 4`.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, rgba_bytes: Vec<u8>) -> Self {
        let expected_len = (width as usize) * (height as usize) * 4;
        assert_eq!(
            rgba_bytes.len(),
            expected_len,
            "RGBA data length mismatch: expected {expected_len}, got {}",
            rgba_bytes.len()
        );

        Self {
            width,
            height,
            rgba_bytes: Arc::new(rgba_bytes),
        }
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[must_use]
    pub fn rgba_bytes(&self) -> &[u8] {
        &self.rgba_bytes
    }

    /// Consumes the image and returns its pixel buffer, cloning only if shared.
    #[must_use]
    pub fn into_rgba_bytes(self) -> Vec<u8> {
        Arc::try_unwrap(self.rgba_bytes).unwrap_or_else(|shared| shared.as_ref().clone())
    }
}

/// Reference to a video bound to the viewer.
///
/// Playback itself is delegated to the host platform; the viewer only needs
/// something to show and hand back.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VideoRef {
    /// Local file.
    File(PathBuf),
    /// Remote stream.
    Remote(String),
}

impl VideoRef {
    /// Builds a reference from a CLI-style argument.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Self::Remote(raw.to_string())
        } else {
            Self::File(PathBuf::from(raw))
        }
    }

    /// Short label shown under the video surface.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self {
            VideoRef::File(path) => file_name(path),
            VideoRef::Remote(url) => url
                .rsplit('/')
                .find(|segment| !segment.is_empty())
                .unwrap_or(url)
                .to_string(),
        }
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

impl fmt::Display for VideoRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VideoRef::File(path) => write!(f, "{}", path.display()),
            VideoRef::Remote(url) => f.write_str(url),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_image_creation() {
        let image = RawImage::from_rgba(10, 10, vec![0u8; 400]);
        assert_eq!(image.width(), 10);
        assert_eq!(image.height(), 10);
        assert_eq!(image.rgba_bytes().len(), 400);
    }

    #[test]
    #[should_panic(expected = "RGBA data length mismatch")]
    fn raw_image_invalid_size() {
        let _ = RawImage::from_rgba(10, 10, vec![0u8; 100]);
    }

    #[test]
    fn into_rgba_bytes_returns_buffer() {
        let image = RawImage::from_rgba(1, 1, vec![1, 2, 3, 4]);
        assert_eq!(image.into_rgba_bytes(), vec![1, 2, 3, 4]);
    }

    #[test]
    fn video_ref_parses_urls_and_paths() {
        assert_eq!(
            VideoRef::parse("https://cdn.example.com/clips/intro.mp4"),
            VideoRef::Remote("https://cdn.example.com/clips/intro.mp4".into())
        );
        assert_eq!(
            VideoRef::parse("/tmp/clip.mov"),
            VideoRef::File(PathBuf::from("/tmp/clip.mov"))
        );
    }

    #[test]
    fn video_ref_display_name() {
        assert_eq!(VideoRef::parse("/tmp/clip.mov").display_name(), "clip.mov");
        assert_eq!(
            VideoRef::parse("https://cdn.example.com/clips/intro.mp4/").display_name(),
            "intro.mp4"
        );
    }
}
