// SPDX-License-Identifier: MPL-2.0
//! Filesystem adapter implementing the [`PhotoLibrary`] port.
//!
//! Local identifiers are paths relative to a root directory. Thumbnail
//! requests decode and downscale with the fast filter; full requests decode
//! at native pixel dimensions.

use std::fs;
use std::path::{Component, Path, PathBuf};

use image_rs::GenericImageView;

use crate::application::port::{DeliveryMode, ImageRequest, PhotoLibrary};
use crate::domain::asset::LibraryRef;
use crate::domain::error::FetchError;
use crate::domain::media::RawImage;

/// Extensions the library lists when enumerating its items.
pub const SUPPORTED_EXTENSIONS: &[&str] = &[
    "png", "jpg", "jpeg", "gif", "webp", "bmp", "tif", "tiff",
];

/// Directory-backed photo library.
///
/// # Example
///
/// ```ignore
/// use iced_gallery::infrastructure::FsPhotoLibrary;
///
/// let library = FsPhotoLibrary::new("/home/me/Pictures");
/// for reference in library.list()? {
///     println!("{reference}");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct FsPhotoLibrary {
    root: PathBuf,
}

impl FsPhotoLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Lists every supported image directly under the root, sorted by name.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Io`] if the root directory cannot be read.
    pub fn list(&self) -> Result<Vec<LibraryRef>, FetchError> {
        let entries = fs::read_dir(&self.root).map_err(|e| FetchError::Io(e.to_string()))?;

        let mut names: Vec<String> = entries
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| is_supported(Path::new(name)))
            .collect();
        names.sort();

        Ok(names.into_iter().map(LibraryRef::new).collect())
    }

    /// Maps a reference onto a file under the root.
    ///
    /// Identifiers that try to leave the root (absolute paths, `..`) are
    /// reported as not found.
    fn locate(&self, reference: &LibraryRef) -> Result<PathBuf, FetchError> {
        let relative = Path::new(reference.local_identifier());
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
        if escapes || reference.local_identifier().is_empty() {
            return Err(FetchError::NotFound(reference.to_string()));
        }

        let path = self.root.join(relative);
        if path.is_file() {
            Ok(path)
        } else {
            Err(FetchError::NotFound(reference.to_string()))
        }
    }
}

impl PhotoLibrary for FsPhotoLibrary {
    fn request_image(
        &self,
        reference: &LibraryRef,
        request: ImageRequest,
    ) -> Result<RawImage, FetchError> {
        let path = self.locate(reference)?;
        let bytes = fs::read(&path).map_err(|e| FetchError::Io(e.to_string()))?;
        let decoded =
            image_rs::load_from_memory(&bytes).map_err(|e| FetchError::Decode(e.to_string()))?;

        let (target_width, target_height) = (request.target_width, request.target_height);
        let fits = decoded.width() <= target_width && decoded.height() <= target_height;
        let decoded = match request.delivery {
            _ if fits => decoded,
            DeliveryMode::Fast => decoded.thumbnail(target_width, target_height),
            DeliveryMode::HighQuality => decoded.resize(
                target_width,
                target_height,
                image_rs::imageops::FilterType::Lanczos3,
            ),
        };

        let (width, height) = decoded.dimensions();
        Ok(RawImage::from_rgba(width, height, decoded.to_rgba8().into_vec()))
    }

    fn pixel_size(&self, reference: &LibraryRef) -> Result<(u32, u32), FetchError> {
        let path = self.locate(reference)?;
        image_rs::image_dimensions(&path).map_err(|e| FetchError::Decode(e.to_string()))
    }
}

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|supported| ext.eq_ignore_ascii_case(supported))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{Rgba, RgbaImage};
    use tempfile::tempdir;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) {
        RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]))
            .save(dir.join(name))
            .expect("failed to write png");
    }

    #[test]
    fn full_request_keeps_native_size() {
        let dir = tempdir().expect("temp dir");
        write_png(dir.path(), "wide.png", 400, 100);
        let library = FsPhotoLibrary::new(dir.path());

        let reference = LibraryRef::new("wide.png");
        let native = library.pixel_size(&reference).expect("pixel size");
        let raw = library
            .request_image(&reference, ImageRequest::native(native))
            .expect("full decode");
        assert_eq!((raw.width(), raw.height()), (400, 100));
    }

    #[test]
    fn thumbnail_request_fits_target() {
        let dir = tempdir().expect("temp dir");
        write_png(dir.path(), "wide.png", 400, 100);
        let library = FsPhotoLibrary::new(dir.path());

        let raw = library
            .request_image(
                &LibraryRef::new("wide.png"),
                ImageRequest::thumbnail(150, 150),
            )
            .expect("thumbnail decode");
        assert!(raw.width() <= 150);
        assert!(raw.height() <= 150);
    }

    #[test]
    fn small_items_are_not_upscaled() {
        let dir = tempdir().expect("temp dir");
        write_png(dir.path(), "tiny.png", 20, 10);
        let library = FsPhotoLibrary::new(dir.path());

        let raw = library
            .request_image(&LibraryRef::new("tiny.png"), ImageRequest::thumbnail(150, 150))
            .expect("thumbnail decode");
        assert_eq!((raw.width(), raw.height()), (20, 10));
    }

    #[test]
    fn pixel_size_reads_header_only() {
        let dir = tempdir().expect("temp dir");
        write_png(dir.path(), "a.png", 32, 16);
        let library = FsPhotoLibrary::new(dir.path());
        assert_eq!(library.pixel_size(&LibraryRef::new("a.png")), Ok((32, 16)));
    }

    #[test]
    fn missing_item_is_not_found() {
        let dir = tempdir().expect("temp dir");
        let library = FsPhotoLibrary::new(dir.path());
        let result = library.request_image(
            &LibraryRef::new("nope.png"),
            ImageRequest::native((100, 100)),
        );
        assert!(matches!(result, Err(FetchError::NotFound(_))));
    }

    #[test]
    fn identifiers_cannot_escape_root() {
        let dir = tempdir().expect("temp dir");
        let library = FsPhotoLibrary::new(dir.path().join("sub"));
        let result = library.pixel_size(&LibraryRef::new("../secret.png"));
        assert!(matches!(result, Err(FetchError::NotFound(_))));
    }

    #[test]
    fn corrupt_file_is_decode_error() {
        let dir = tempdir().expect("temp dir");
        fs::write(dir.path().join("bad.png"), b"not an image").expect("write");
        let library = FsPhotoLibrary::new(dir.path());
        let result = library.request_image(
            &LibraryRef::new("bad.png"),
            ImageRequest::native((100, 100)),
        );
        assert!(matches!(result, Err(FetchError::Decode(_))));
    }

    #[test]
    fn list_returns_sorted_images_only() {
        let dir = tempdir().expect("temp dir");
        write_png(dir.path(), "b.png", 2, 2);
        write_png(dir.path(), "a.png", 2, 2);
        fs::write(dir.path().join("notes.txt"), b"hello").expect("write");

        let library = FsPhotoLibrary::new(dir.path());
        let listed = library.list().expect("list");
        assert_eq!(listed, vec![LibraryRef::new("a.png"), LibraryRef::new("b.png")]);
    }
}
