// SPDX-License-Identifier: MPL-2.0
//! Displayable assets handed to the viewer by the host.
//!
//! An [`Asset`] pairs a stable [`AssetId`] with where its bits come from and
//! the decoded image once it is known. Equality is identity: two assets with
//! identical pixels but different ids are different assets.

use std::hash::{Hash, Hasher};

use reqwest::Url;

use super::image::ImageData;
use crate::domain::asset::{AssetId, LibraryRef};

/// Where an asset's bits are fetched from when they are not already decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetSource {
    /// Item in the system photo library.
    Library(LibraryRef),
    /// Image served over HTTP(S).
    Remote(Url),
}

/// One displayable item.
///
/// # Example
///
/// ```
/// use iced_gallery::domain::asset::LibraryRef;
/// use iced_gallery::media::Asset;
///
/// let a = Asset::from_library(LibraryRef::new("beach.jpg"));
/// let b = Asset::from_library(LibraryRef::new("beach.jpg"));
/// assert_ne!(a, b);
/// assert_eq!(a, a.clone());
/// ```
#[derive(Debug, Clone)]
pub struct Asset {
    id: AssetId,
    source: Option<AssetSource>,
    image: Option<ImageData>,
}

impl Asset {
    /// Wraps already-decoded bits. The asset is resolved from the start.
    #[must_use]
    pub fn from_image(image: ImageData) -> Self {
        Self {
            id: AssetId::new(),
            source: None,
            image: Some(image),
        }
    }

    #[must_use]
    pub fn from_library(reference: LibraryRef) -> Self {
        Self {
            id: AssetId::new(),
            source: Some(AssetSource::Library(reference)),
            image: None,
        }
    }

    #[must_use]
    pub fn from_url(url: Url) -> Self {
        Self {
            id: AssetId::new(),
            source: Some(AssetSource::Remote(url)),
            image: None,
        }
    }

    pub fn from_images(images: impl IntoIterator<Item = ImageData>) -> Vec<Self> {
        images.into_iter().map(Self::from_image).collect()
    }

    pub fn from_library_refs(references: impl IntoIterator<Item = LibraryRef>) -> Vec<Self> {
        references.into_iter().map(Self::from_library).collect()
    }

    #[must_use]
    pub fn id(&self) -> AssetId {
        self.id
    }

    #[must_use]
    pub fn source(&self) -> Option<&AssetSource> {
        self.source.as_ref()
    }

    /// The resolved bits, if loading already completed.
    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.image.is_some()
    }

    /// Stores decoded bits. Used by the loader on success and by hosts that
    /// replace an image after an external edit.
    pub fn set_image(&mut self, image: ImageData) {
        self.image = Some(image);
    }

    /// Drops the resolved bits so the next resolve goes back to the source.
    pub fn clear_image(&mut self) {
        self.image = None;
    }
}

impl PartialEq for Asset {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Asset {}

impl Hash for Asset {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
