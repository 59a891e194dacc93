// SPDX-License-Identifier: MPL-2.0
//! On-demand resolution of asset bits.
//!
//! The [`AssetLoader`] turns an [`Asset`] into displayable [`ImageData`]:
//!
//! - already-resolved assets are returned immediately, without I/O
//! - library references are fetched through the [`PhotoLibrary`] port
//! - URLs are downloaded and decoded
//! - anything else fails at once with [`FetchError::NoSource`]
//!
//! Every fetch runs as an abortable `Task` paired with a cancellation token.
//! At most one request per asset is outstanding; results for requests that
//! were cancelled or superseded are discarded by [`AssetLoader::complete`].
//! Failures are remembered and never retried automatically.
//!
//! Thumbnails the loader stored into an asset do not satisfy a later
//! full-quality request: the asset is fetched again at native size. A
//! running thumbnail fetch is superseded the same way.
//!
//! [`PhotoLibrary`]: crate::application::port::PhotoLibrary

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use iced::task::{self, Task};
use reqwest::Url;

use super::asset::{Asset, AssetSource};
use super::image::{decode_bytes, ImageData};
use crate::application::port::{ImageRequest, PhotoLibrary, SharedPhotoLibrary};
use crate::domain::asset::{AssetId, ImageQuality, LibraryRef};
use crate::domain::error::FetchError;
use crate::infrastructure::remote;

/// Cancellation token shared between the loader and a running fetch.
pub type CancellationToken = Arc<AtomicBool>;

/// Checks if the operation has been cancelled.
#[inline]
pub fn is_cancelled(token: &CancellationToken) -> bool {
    token.load(Ordering::Relaxed)
}

/// Output of a fetch task, fed back through [`AssetLoader::complete`].
#[derive(Debug, Clone)]
pub struct Loaded {
    pub id: AssetId,
    /// Quality the fetch was started for.
    pub quality: ImageQuality,
    pub result: Result<ImageData, FetchError>,
}

/// Outcome of [`AssetLoader::resolve`].
pub enum Resolution {
    /// Bits are available now.
    Ready(ImageData),
    /// A fetch was started; run the task and pass its output to `complete`.
    Pending(Task<Loaded>),
    /// A fetch for this asset is already running.
    InFlight,
    /// The asset cannot be displayed.
    Failed(FetchError),
}

impl std::fmt::Debug for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Ready(image) => f
                .debug_tuple("Ready")
                .field(&(image.width, image.height))
                .finish(),
            Resolution::Pending(_) => f.write_str("Pending"),
            Resolution::InFlight => f.write_str("InFlight"),
            Resolution::Failed(err) => f.debug_tuple("Failed").field(err).finish(),
        }
    }
}

struct InFlightRequest {
    quality: ImageQuality,
    token: CancellationToken,
    handle: task::Handle,
}

/// Per-view loader state.
#[derive(Default)]
pub struct AssetLoader {
    library: Option<SharedPhotoLibrary>,
    in_flight: HashMap<AssetId, InFlightRequest>,
    failed: HashMap<AssetId, FetchError>,
    /// Quality and image generation of bits this loader delivered.
    delivered: HashMap<AssetId, (ImageQuality, u64)>,
}

impl std::fmt::Debug for AssetLoader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AssetLoader")
            .field("has_library", &self.library.is_some())
            .field("in_flight", &self.in_flight.len())
            .field("failed", &self.failed.len())
            .finish()
    }
}

impl AssetLoader {
    /// Creates a loader that resolves library references through `library`.
    #[must_use]
    pub fn new(library: Option<SharedPhotoLibrary>) -> Self {
        Self {
            library,
            in_flight: HashMap::new(),
            failed: HashMap::new(),
            delivered: HashMap::new(),
        }
    }

    /// Resolves the bits of `asset` at the requested quality.
    pub fn resolve(&mut self, asset: &Asset, quality: ImageQuality) -> Resolution {
        let id = asset.id();

        if let Some(image) = asset.image() {
            if !self.needs_upgrade(id, image, quality) {
                return Resolution::Ready(image.clone());
            }
        }
        if let Some(error) = self.failed.get(&id) {
            return Resolution::Failed(error.clone());
        }
        if let Some(request) = self.in_flight.get(&id) {
            if request.quality.satisfies(quality) {
                return Resolution::InFlight;
            }
            tracing::debug!(asset = %id, "superseding thumbnail fetch");
            self.cancel(id);
        }

        let Some(source) = asset.source().cloned() else {
            self.failed.insert(id, FetchError::NoSource);
            return Resolution::Failed(FetchError::NoSource);
        };

        tracing::debug!(asset = %id, ?quality, "starting fetch");

        let token: CancellationToken = Arc::new(AtomicBool::new(false));
        let library = self.library.clone();
        let future = async move {
            let result = match source {
                AssetSource::Library(reference) => {
                    fetch_from_library(library, reference, quality).await
                }
                AssetSource::Remote(url) => fetch_remote(url).await,
            };
            Loaded {
                id,
                quality,
                result,
            }
        };

        let (task, handle) = Task::perform(future, std::convert::identity).abortable();
        self.in_flight.insert(
            id,
            InFlightRequest {
                quality,
                token,
                handle,
            },
        );

        Resolution::Pending(task)
    }

    /// Accepts the output of a fetch task.
    ///
    /// Returns `None` when the request was cancelled or is unknown; nothing
    /// must be committed in that case. Failures are recorded so the asset is
    /// not fetched again.
    pub fn complete(&mut self, loaded: Loaded) -> Option<Result<ImageData, FetchError>> {
        let request = self.in_flight.get(&loaded.id)?;
        if request.quality != loaded.quality {
            tracing::debug!(asset = %loaded.id, "discarding result of superseded fetch");
            return None;
        }
        let request = self.in_flight.remove(&loaded.id)?;
        if is_cancelled(&request.token) {
            tracing::debug!(asset = %loaded.id, "discarding result of cancelled fetch");
            return None;
        }

        match &loaded.result {
            Ok(image) => {
                self.delivered
                    .insert(loaded.id, (loaded.quality, image.generation()));
            }
            Err(error) => {
                tracing::warn!(asset = %loaded.id, %error, "fetch failed");
                self.failed.insert(loaded.id, error.clone());
            }
        }
        Some(loaded.result)
    }

    /// True when `image` is a thumbnail this loader delivered and `quality`
    /// asks for more. Bits replaced by the host since then are kept.
    fn needs_upgrade(&self, id: AssetId, image: &ImageData, quality: ImageQuality) -> bool {
        self.delivered.get(&id).is_some_and(|&(delivered, generation)| {
            generation == image.generation() && !delivered.satisfies(quality)
        })
    }

    /// Cancels the request for `id`, if any.
    pub fn cancel(&mut self, id: AssetId) {
        if let Some(request) = self.in_flight.remove(&id) {
            tracing::debug!(asset = %id, "cancelling fetch");
            request.token.store(true, Ordering::Relaxed);
            request.handle.abort();
        }
    }

    /// Cancels every outstanding request. Called on view teardown.
    pub fn cancel_all(&mut self) {
        let ids: Vec<AssetId> = self.in_flight.keys().copied().collect();
        for id in ids {
            self.cancel(id);
        }
    }

    /// Cancels and forgets everything known about `id`.
    pub fn forget(&mut self, id: AssetId) {
        self.cancel(id);
        self.failed.remove(&id);
        self.delivered.remove(&id);
    }

    #[must_use]
    pub fn is_in_flight(&self, id: AssetId) -> bool {
        self.in_flight.contains_key(&id)
    }

    #[must_use]
    pub fn failure(&self, id: AssetId) -> Option<&FetchError> {
        self.failed.get(&id)
    }

    #[must_use]
    pub fn in_flight_count(&self) -> usize {
        self.in_flight.len()
    }
}

async fn fetch_from_library(
    library: Option<SharedPhotoLibrary>,
    reference: LibraryRef,
    quality: ImageQuality,
) -> Result<ImageData, FetchError> {
    let Some(library) = library else {
        return Err(FetchError::NotFound(reference.to_string()));
    };

    tokio::task::spawn_blocking(move || {
        let request = library_request(library.as_ref(), &reference, quality)?;
        library
            .request_image(&reference, request)
            .map(ImageData::from_raw)
    })
    .await
    .map_err(|e| FetchError::Io(e.to_string()))?
}

/// Thumbnails ask for the cell size; full images ask for the native size
/// the library reports.
fn library_request(
    library: &dyn PhotoLibrary,
    reference: &LibraryRef,
    quality: ImageQuality,
) -> Result<ImageRequest, FetchError> {
    match quality {
        ImageQuality::Thumbnail { width, height } => Ok(ImageRequest::thumbnail(width, height)),
        ImageQuality::Full => library.pixel_size(reference).map(ImageRequest::native),
    }
}

async fn fetch_remote(url: Url) -> Result<ImageData, FetchError> {
    let bytes = remote::fetch_bytes(&url).await?;
    tokio::task::spawn_blocking(move || decode_bytes(&bytes).map(ImageData::from_raw))
        .await
        .map_err(|e| FetchError::Io(e.to_string()))?
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel() -> ImageData {
        ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    fn library_asset() -> Asset {
        Asset::from_library(LibraryRef::new("photo.png"))
    }

    #[test]
    fn resolved_asset_is_ready_without_fetch() {
        let mut loader = AssetLoader::default();
        let asset = Asset::from_image(pixel());

        let resolution = loader.resolve(&asset, ImageQuality::Full);
        assert!(matches!(resolution, Resolution::Ready(_)));
        assert_eq!(loader.in_flight_count(), 0);
    }

    #[test]
    fn asset_without_payload_fails_immediately() {
        let mut loader = AssetLoader::default();
        let mut asset = Asset::from_image(pixel());
        asset.clear_image();

        let resolution = loader.resolve(&asset, ImageQuality::Full);
        assert!(matches!(resolution, Resolution::Failed(FetchError::NoSource)));
        assert_eq!(loader.in_flight_count(), 0);
    }

    #[test]
    fn second_resolve_does_not_double_fetch() {
        let mut loader = AssetLoader::default();
        let asset = library_asset();

        assert!(matches!(
            loader.resolve(&asset, ImageQuality::thumbnail(150)),
            Resolution::Pending(_)
        ));
        assert!(matches!(
            loader.resolve(&asset, ImageQuality::thumbnail(150)),
            Resolution::InFlight
        ));
        assert_eq!(loader.in_flight_count(), 1);
    }

    #[test]
    fn complete_returns_result_once() {
        let mut loader = AssetLoader::default();
        let asset = library_asset();
        let _ = loader.resolve(&asset, ImageQuality::Full);

        let loaded = Loaded {
            id: asset.id(),
            quality: ImageQuality::Full,
            result: Ok(pixel()),
        };
        assert!(matches!(loader.complete(loaded.clone()), Some(Ok(_))));
        assert!(loader.complete(loaded).is_none());
        assert!(!loader.is_in_flight(asset.id()));
    }

    #[test]
    fn cancelled_result_is_discarded() {
        let mut loader = AssetLoader::default();
        let asset = library_asset();
        let _ = loader.resolve(&asset, ImageQuality::Full);

        loader.cancel(asset.id());
        let committed = loader.complete(Loaded {
            id: asset.id(),
            quality: ImageQuality::Full,
            result: Ok(pixel()),
        });
        assert!(committed.is_none());
    }

    #[test]
    fn cancel_all_clears_every_request() {
        let mut loader = AssetLoader::default();
        let a = library_asset();
        let b = Asset::from_url(Url::parse("https://example.com/b.jpg").expect("url"));
        let _ = loader.resolve(&a, ImageQuality::Full);
        let _ = loader.resolve(&b, ImageQuality::Full);
        assert_eq!(loader.in_flight_count(), 2);

        loader.cancel_all();
        assert_eq!(loader.in_flight_count(), 0);
        assert!(loader
            .complete(Loaded {
                id: b.id(),
                quality: ImageQuality::Full,
                result: Ok(pixel()),
            })
            .is_none());
    }

    #[test]
    fn failures_are_not_retried() {
        let mut loader = AssetLoader::default();
        let asset = library_asset();
        let _ = loader.resolve(&asset, ImageQuality::Full);

        let committed = loader.complete(Loaded {
            id: asset.id(),
            quality: ImageQuality::Full,
            result: Err(FetchError::Decode("truncated".into())),
        });
        assert!(matches!(committed, Some(Err(FetchError::Decode(_)))));
        assert!(matches!(
            loader.resolve(&asset, ImageQuality::Full),
            Resolution::Failed(FetchError::Decode(_))
        ));
        assert_eq!(loader.in_flight_count(), 0);
    }

    #[test]
    fn forget_allows_a_fresh_fetch() {
        let mut loader = AssetLoader::default();
        let asset = library_asset();
        let _ = loader.resolve(&asset, ImageQuality::Full);
        let _ = loader.complete(Loaded {
            id: asset.id(),
            quality: ImageQuality::Full,
            result: Err(FetchError::Network("offline".into())),
        });

        loader.forget(asset.id());
        assert!(loader.failure(asset.id()).is_none());
        assert!(matches!(
            loader.resolve(&asset, ImageQuality::Full),
            Resolution::Pending(_)
        ));
    }

    #[test]
    fn full_request_supersedes_running_thumbnail() {
        let mut loader = AssetLoader::default();
        let asset = library_asset();
        let thumb = ImageQuality::thumbnail(150);
        let _ = loader.resolve(&asset, thumb);

        assert!(matches!(
            loader.resolve(&asset, ImageQuality::Full),
            Resolution::Pending(_)
        ));
        assert_eq!(loader.in_flight_count(), 1);

        // The late thumbnail is dropped, the full result is accepted
        let late = loader.complete(Loaded {
            id: asset.id(),
            quality: thumb,
            result: Ok(pixel()),
        });
        assert!(late.is_none());
        assert!(loader.is_in_flight(asset.id()));
        let full = loader.complete(Loaded {
            id: asset.id(),
            quality: ImageQuality::Full,
            result: Ok(pixel()),
        });
        assert!(matches!(full, Some(Ok(_))));
    }

    #[test]
    fn delivered_thumbnail_is_refetched_at_full_quality() {
        let mut loader = AssetLoader::default();
        let mut asset = library_asset();
        let thumb = ImageQuality::thumbnail(150);
        let _ = loader.resolve(&asset, thumb);
        let Some(Ok(image)) = loader.complete(Loaded {
            id: asset.id(),
            quality: thumb,
            result: Ok(pixel()),
        }) else {
            panic!("thumbnail should be accepted");
        };
        asset.set_image(image);

        assert!(matches!(loader.resolve(&asset, thumb), Resolution::Ready(_)));
        assert!(matches!(
            loader.resolve(&asset, ImageQuality::Full),
            Resolution::Pending(_)
        ));
    }

    #[test]
    fn host_replaced_image_is_not_refetched() {
        let mut loader = AssetLoader::default();
        let mut asset = library_asset();
        let thumb = ImageQuality::thumbnail(150);
        let _ = loader.resolve(&asset, thumb);
        if let Some(Ok(image)) = loader.complete(Loaded {
            id: asset.id(),
            quality: thumb,
            result: Ok(pixel()),
        }) {
            asset.set_image(image);
        }

        asset.set_image(pixel());
        assert!(matches!(
            loader.resolve(&asset, ImageQuality::Full),
            Resolution::Ready(_)
        ));
    }

    struct SizedLibrary;

    impl PhotoLibrary for SizedLibrary {
        fn request_image(
            &self,
            _reference: &LibraryRef,
            _request: ImageRequest,
        ) -> Result<crate::domain::media::RawImage, FetchError> {
            Err(FetchError::NoSource)
        }

        fn pixel_size(&self, _reference: &LibraryRef) -> Result<(u32, u32), FetchError> {
            Ok((4032, 3024))
        }
    }

    #[test]
    fn full_library_requests_use_native_size() {
        let reference = LibraryRef::new("photo.png");
        let full = library_request(&SizedLibrary, &reference, ImageQuality::Full).expect("full");
        assert_eq!(full, ImageRequest::native((4032, 3024)));

        let thumb = library_request(&SizedLibrary, &reference, ImageQuality::thumbnail(150))
            .expect("thumbnail");
        assert_eq!(thumb, ImageRequest::thumbnail(150, 150));
    }
}
