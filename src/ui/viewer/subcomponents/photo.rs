// SPDX-License-Identifier: MPL-2.0
//! Per-item load state with animated spinner.
//!
//! Wraps the [`AssetLoader`] for one viewer instance. The viewer asks for
//! tasks through [`State::request`] and feeds their output back as
//! [`Message::Loaded`]; successful loads come back as an effect so the
//! viewer can store the bits into the asset it owns.

use crate::application::port::SharedPhotoLibrary;
use crate::domain::asset::{AssetId, ImageQuality};
use crate::domain::error::FetchError;
use crate::media::{Asset, AssetLoader, ImageData, Loaded, Resolution};
use crate::ui::widgets::animated_spinner;
use iced::Task;

/// How a single item should be drawn.
#[derive(Debug, Clone, Copy)]
pub enum Status<'a> {
    Ready(&'a ImageData),
    Loading,
    Failed(&'a FetchError),
}

/// Load state for every displayed item.
#[derive(Debug, Default)]
pub struct State {
    loader: AssetLoader,
    /// Current spinner rotation angle in radians.
    spinner_rotation: f32,
}

/// Messages for the photo sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A fetch task finished.
    Loaded(Loaded),
    /// Animate the spinner.
    SpinnerTick,
}

/// Effects produced by load results.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// Bits for this asset are ready to be stored.
    Resolved(AssetId, ImageData),
    /// The asset is now in the terminal failed state.
    Failed(AssetId),
}

impl State {
    #[must_use]
    pub fn new(library: Option<SharedPhotoLibrary>) -> Self {
        Self {
            loader: AssetLoader::new(library),
            spinner_rotation: 0.0,
        }
    }

    /// Starts loading every asset in `assets` that still needs bits.
    pub fn request_all<'a>(
        &mut self,
        assets: impl IntoIterator<Item = &'a Asset>,
        quality: ImageQuality,
    ) -> Task<Loaded> {
        Task::batch(assets.into_iter().map(|asset| self.request(asset, quality)))
    }

    /// Starts loading `asset` if nothing is known about it yet.
    pub fn request(&mut self, asset: &Asset, quality: ImageQuality) -> Task<Loaded> {
        match self.loader.resolve(asset, quality) {
            Resolution::Pending(task) => task,
            Resolution::Ready(_) | Resolution::InFlight | Resolution::Failed(_) => Task::none(),
        }
    }

    /// Handle a photo message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Loaded(loaded) => {
                let id = loaded.id;
                match self.loader.complete(loaded) {
                    Some(Ok(image)) => Effect::Resolved(id, image),
                    Some(Err(_)) => Effect::Failed(id),
                    None => Effect::None,
                }
            }
            Message::SpinnerTick => {
                if self.is_loading() {
                    self.spinner_rotation = animated_spinner::advance(self.spinner_rotation);
                }
                Effect::None
            }
        }
    }

    /// Display status of `asset`.
    ///
    /// Items not yet requested are drawn as loading; the request follows on
    /// the next appearance or reload.
    #[must_use]
    pub fn status<'a>(&'a self, asset: &'a Asset) -> Status<'a> {
        if let Some(image) = asset.image() {
            return Status::Ready(image);
        }
        match self.loader.failure(asset.id()) {
            Some(error) => Status::Failed(error),
            None => Status::Loading,
        }
    }

    /// Cancels every in-flight fetch. Called when the viewer goes away.
    pub fn teardown(&mut self) {
        self.cancel_pending();
        self.spinner_rotation = 0.0;
    }

    /// Cancels every in-flight fetch, keeping what was already loaded.
    ///
    /// Used when the layout switches and pending requests were made for the
    /// previous one.
    pub fn cancel_pending(&mut self) {
        if self.loader.in_flight_count() > 0 {
            tracing::debug!(count = self.loader.in_flight_count(), "cancelling pending loads");
        }
        self.loader.cancel_all();
    }

    /// Drops everything known about a removed asset.
    pub fn forget(&mut self, id: AssetId) {
        self.loader.forget(id);
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loader.in_flight_count() > 0
    }

    #[must_use]
    pub fn spinner_rotation(&self) -> f32 {
        self.spinner_rotation
    }
}
