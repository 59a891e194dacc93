// SPDX-License-Identifier: MPL-2.0
//! Asset identity and request types.
//!
//! An asset's identity is the only thing that makes two assets equal. It is
//! allocated once, never derived from a position in a collection, and never
//! reused for the lifetime of the process.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

// =============================================================================
// AssetId
// =============================================================================

/// Process-unique, immutable identifier of a displayable asset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetId(u64);

impl AssetId {
    /// Allocates a fresh identifier.
    #[must_use]
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw numeric value (for logging).
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for AssetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for AssetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "asset#{}", self.0)
    }
}

// =============================================================================
// LibraryRef
// =============================================================================

/// Reference into a system photo library (a local identifier).
///
/// The library decides what the identifier means; the viewer only carries it
/// to the [`PhotoLibrary`](crate::application::port::PhotoLibrary) port.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LibraryRef(String);

impl LibraryRef {
    /// Wraps a local identifier.
    pub fn new(local_identifier: impl Into<String>) -> Self {
        Self(local_identifier.into())
    }

    /// Returns the local identifier.
    #[must_use]
    pub fn local_identifier(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LibraryRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// ImageQuality
// =============================================================================

/// Requested fidelity when resolving an asset's bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageQuality {
    /// Fast, low-fidelity image fitted to the target size (grid cells).
    Thumbnail {
        /// Target width in pixels.
        width: u32,
        /// Target height in pixels.
        height: u32,
    },
    /// Highest fidelity at the asset's native pixel dimensions.
    Full,
}

impl ImageQuality {
    /// Square thumbnail of the given edge length.
    #[must_use]
    pub fn thumbnail(edge: u32) -> Self {
        Self::Thumbnail {
            width: edge,
            height: edge,
        }
    }

    /// Returns true for thumbnail requests.
    #[must_use]
    pub fn is_thumbnail(self) -> bool {
        matches!(self, Self::Thumbnail { .. })
    }

    /// Whether bits fetched at `self` can be shown where `wanted` is asked for.
    ///
    /// Full images serve every request; thumbnails only serve thumbnails.
    #[must_use]
    pub fn satisfies(self, wanted: ImageQuality) -> bool {
        !self.is_thumbnail() || wanted.is_thumbnail()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        let a = AssetId::new();
        let b = AssetId::new();
        let c = AssetId::default();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert!(b.value() > a.value());
    }

    #[test]
    fn thumbnails_do_not_satisfy_full_requests() {
        let thumb = ImageQuality::thumbnail(150);
        assert!(thumb.satisfies(ImageQuality::thumbnail(150)));
        assert!(!thumb.satisfies(ImageQuality::Full));
        assert!(ImageQuality::Full.satisfies(thumb));
        assert!(ImageQuality::Full.satisfies(ImageQuality::Full));
    }

    #[test]
    fn library_ref_keeps_identifier() {
        let reference = LibraryRef::new("2024/beach.jpg");
        assert_eq!(reference.local_identifier(), "2024/beach.jpg");
        assert_eq!(reference.to_string(), "2024/beach.jpg");
    }

    #[test]
    fn thumbnail_helper_is_square() {
        assert_eq!(
            ImageQuality::thumbnail(150),
            ImageQuality::Thumbnail {
                width: 150,
                height: 150
            }
        );
        assert!(ImageQuality::thumbnail(1).is_thumbnail());
        assert!(!ImageQuality::Full.is_thumbnail());
    }
}
