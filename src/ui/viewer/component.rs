// SPDX-License-Identifier: MPL-2.0
//! Viewer component encapsulating state and update logic.
//!
//! The component owns the displayed asset collection for as long as it is
//! open. Hosts talk to it through [`Message`]s and react to the [`Effect`]
//! returned by [`State::handle_message`], either directly or through
//! [`HostCallbacks`](super::HostCallbacks).

use super::config::ViewerConfig;
use super::subcomponents::selection::is_single_photo_mode;
use super::subcomponents::{photo, reconcile, selection, upload};
use super::{bottom_bar, grid, photo_view, top_bar, upload_overlay, video_surface};
use crate::application::port::SharedPhotoLibrary;
use crate::application::SharedUploadState;
use crate::domain::asset::{AssetId, ImageQuality};
use crate::domain::media::VideoRef;
use crate::i18n::fluent::I18n;
use crate::media::{Asset, ImageData};
use iced::widget::{Column, Container, Stack};
use iced::{Element, Length, Subscription, Task};
use std::time::Duration;

/// Spinner frame interval while something is loading.
const SPINNER_INTERVAL: Duration = Duration::from_millis(16);

/// Messages emitted by the viewer and its widgets.
#[derive(Debug, Clone)]
pub enum Message {
    /// The viewer became visible.
    Appeared,
    /// The viewer was hidden by the host.
    Disappeared,
    CloseRequested,
    /// Bottom action button in normal mode.
    SaveRequested,
    EditRequested,
    CommentChanged(String),
    Selection(selection::Message),
    /// Bottom action button in selection mode.
    RemoveSelected,
    Photo(photo::Message),
    Upload(upload::Message),
    /// The last asset was removed.
    CollectionEmptied,
}

/// Effects the host should act upon.
#[derive(Debug, Clone)]
pub enum Effect {
    None,
    /// Save pressed with the current comment and collection.
    Save { comment: String, assets: Vec<Asset> },
    /// Close pressed. The host hides the viewer.
    Close,
    /// Edit pressed on the displayed asset.
    Edit(Asset),
    /// Assets removed from the collection, in their original order.
    AssetsRemoved(Vec<Asset>),
    /// The viewer dismissed itself (upload finished or collection emptied).
    Dismiss,
}

/// Environment information required to render the viewer.
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub is_dark_theme: bool,
}

/// Complete viewer component state.
#[derive(Debug)]
pub struct State {
    assets: Vec<Asset>,
    video: Option<VideoRef>,
    config: ViewerConfig,
    upload_state: SharedUploadState,
    comment: String,
    /// Image generation of the first asset when it was first seen.
    opened_generation: Option<u64>,
    visible: bool,
    selection: selection::State,
    upload: upload::State,
    photos: photo::State,
}

impl State {
    /// Creates a hidden viewer. Send [`Message::Appeared`] to show it.
    #[must_use]
    pub fn new(
        assets: Vec<Asset>,
        video: Option<VideoRef>,
        config: ViewerConfig,
        library: Option<SharedPhotoLibrary>,
    ) -> Self {
        let upload_state = config.shared_upload_state.clone().unwrap_or_default();
        let comment = config.initial_comment.clone().unwrap_or_default();
        let upload = upload::State::new(config.settle_delay);
        let opened_generation = assets.first().and_then(Asset::image).map(ImageData::generation);

        Self {
            assets,
            video,
            config,
            upload_state,
            comment,
            opened_generation,
            visible: false,
            selection: selection::State::default(),
            upload,
            photos: photo::State::new(library),
        }
    }

    #[must_use]
    pub fn assets(&self) -> &[Asset] {
        &self.assets
    }

    #[must_use]
    pub fn video(&self) -> Option<&VideoRef> {
        self.video.as_ref()
    }

    #[must_use]
    pub fn comment(&self) -> &str {
        &self.comment
    }

    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// The progress holder this viewer observes.
    #[must_use]
    pub fn upload_state(&self) -> &SharedUploadState {
        &self.upload_state
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn is_single_photo_mode(&self) -> bool {
        is_single_photo_mode(self.assets.len())
    }

    #[must_use]
    pub fn is_selection_mode(&self) -> bool {
        self.selection.is_selection_mode()
    }

    #[must_use]
    pub fn selection(&self) -> &selection::State {
        &self.selection
    }

    #[must_use]
    pub fn upload(&self) -> &upload::State {
        &self.upload
    }

    #[must_use]
    pub fn photos(&self) -> &photo::State {
        &self.photos
    }

    /// Whether interactive controls are disabled by an upload.
    #[must_use]
    pub fn controls_locked(&self) -> bool {
        self.upload.locks_controls()
    }

    /// Whether the displayed image was replaced since the viewer opened.
    #[must_use]
    pub fn was_image_edited(&self) -> bool {
        if !self.is_single_photo_mode() {
            return false;
        }
        let current = self.assets.first().and_then(Asset::image).map(ImageData::generation);
        match (self.opened_generation, current) {
            (Some(opened), Some(current)) => opened != current,
            _ => false,
        }
    }

    /// Whether the bottom action button is shown.
    #[must_use]
    pub fn shows_save_button(&self) -> bool {
        if self.is_single_photo_mode() {
            self.was_image_edited() || self.config.show_save_button
        } else {
            self.config.show_save_button
        }
    }

    /// Whether the edit button is shown.
    #[must_use]
    pub fn shows_edit_button(&self) -> bool {
        self.is_single_photo_mode() && self.config.show_edit_button && !self.assets.is_empty()
    }

    /// Replaces the bits of an asset after an external edit.
    ///
    /// A fetch still running for the asset is cancelled so it cannot
    /// overwrite the edit. Returns `false` when no asset with `id` is
    /// displayed.
    pub fn replace_image(&mut self, id: AssetId, image: ImageData) -> bool {
        let replaced = self.store_image(id, image);
        if replaced {
            self.photos.forget(id);
        }
        replaced
    }

    /// Loaded bits are never an edit, including a full image replacing a
    /// loaded thumbnail.
    fn note_loaded_generation(&mut self, id: AssetId, image: &ImageData) {
        let Some(first) = self.assets.first().filter(|a| a.id() == id) else {
            return;
        };
        let current = first.image().map(ImageData::generation);
        if self.opened_generation.is_none() || self.opened_generation == current {
            self.opened_generation = Some(image.generation());
        }
    }

    fn store_image(&mut self, id: AssetId, image: ImageData) -> bool {
        match self.assets.iter_mut().find(|asset| asset.id() == id) {
            Some(asset) => {
                asset.set_image(image);
                true
            }
            None => false,
        }
    }

    /// Quality requested for items in the current layout.
    #[must_use]
    pub fn display_quality(&self) -> ImageQuality {
        if self.is_single_photo_mode() {
            ImageQuality::Full
        } else {
            ImageQuality::thumbnail(self.config.thumbnail_size)
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        if !self.visible {
            return Subscription::none();
        }

        let upload = Subscription::run_with(self.upload_state.clone(), SharedUploadState::changes)
            .map(|value| Message::Upload(upload::Message::ProgressChanged(value)));

        let spinner = if self.photos.is_loading() {
            iced::time::every(SPINNER_INTERVAL)
                .map(|_| Message::Photo(photo::Message::SpinnerTick))
        } else {
            Subscription::none()
        };

        Subscription::batch([upload, spinner])
    }

    pub fn handle_message(&mut self, message: Message) -> (Effect, Task<Message>) {
        match message {
            Message::Appeared => {
                self.visible = true;
                let progress = self.upload_state.progress();
                if self.upload.handle(upload::Message::Appeared(progress))
                    == upload::Effect::ResetShared
                {
                    tracing::debug!("resetting stale completed upload");
                    self.upload_state.set_progress(None);
                }
                if self.opened_generation.is_none() {
                    self.opened_generation =
                        self.assets.first().and_then(Asset::image).map(ImageData::generation);
                }
                (Effect::None, self.load_visible())
            }
            Message::Disappeared => {
                self.teardown();
                (Effect::None, Task::none())
            }
            Message::CloseRequested => {
                if self.controls_locked() || self.selection.is_selection_mode() {
                    return (Effect::None, Task::none());
                }
                self.teardown();
                (Effect::Close, Task::none())
            }
            Message::SaveRequested => {
                if self.controls_locked() || self.selection.is_selection_mode() {
                    return (Effect::None, Task::none());
                }
                let effect = Effect::Save {
                    comment: self.comment.clone(),
                    assets: self.assets.clone(),
                };
                (effect, Task::none())
            }
            Message::EditRequested => {
                if self.controls_locked() || !self.shows_edit_button() {
                    return (Effect::None, Task::none());
                }
                match self.assets.first() {
                    Some(asset) => (Effect::Edit(asset.clone()), Task::none()),
                    None => (Effect::None, Task::none()),
                }
            }
            Message::CommentChanged(comment) => {
                if !self.controls_locked() && self.config.show_comment_box {
                    self.comment = comment;
                }
                (Effect::None, Task::none())
            }
            Message::Selection(msg) => {
                if self.controls_locked() || self.is_single_photo_mode() {
                    return (Effect::None, Task::none());
                }
                self.selection.handle(msg);
                (Effect::None, Task::none())
            }
            Message::RemoveSelected => self.remove_selected(),
            Message::CollectionEmptied => {
                tracing::info!("collection emptied, dismissing viewer");
                self.teardown();
                (Effect::Dismiss, Task::none())
            }
            Message::Photo(msg) => {
                match self.photos.handle(msg) {
                    photo::Effect::Resolved(id, image) => {
                        self.note_loaded_generation(id, &image);
                        self.store_image(id, image);
                    }
                    photo::Effect::Failed(_) | photo::Effect::None => {}
                }
                (Effect::None, Task::none())
            }
            Message::Upload(msg) => match self.upload.handle(msg) {
                upload::Effect::None => (Effect::None, Task::none()),
                upload::Effect::ResetShared => {
                    self.upload_state.set_progress(None);
                    (Effect::None, Task::none())
                }
                upload::Effect::ScheduleSettle(delay) => {
                    // Sleep is created on first poll, inside the runtime
                    let task = Task::perform(async move { tokio::time::sleep(delay).await }, |()| {
                        Message::Upload(upload::Message::SettleElapsed)
                    });
                    (Effect::None, task)
                }
                upload::Effect::Dismiss => {
                    tracing::info!("upload complete, dismissing viewer");
                    self.teardown();
                    (Effect::Dismiss, Task::none())
                }
            },
        }
    }

    fn remove_selected(&mut self) -> (Effect, Task<Message>) {
        if self.controls_locked() || !self.selection.is_selection_mode() {
            return (Effect::None, Task::none());
        }

        let was_single = self.is_single_photo_mode();
        let removed = reconcile::delete_in_place(self.selection.selected(), &mut self.assets);
        self.selection.clear();
        if removed.is_empty() {
            return (Effect::None, Task::none());
        }

        for asset in &removed {
            self.photos.forget(asset.id());
        }
        tracing::info!(
            removed = removed.len(),
            remaining = self.assets.len(),
            "removed selected assets"
        );

        let task = if self.assets.is_empty() {
            Task::done(Message::CollectionEmptied)
        } else {
            if !was_single && self.is_single_photo_mode() {
                // Grid thumbnails are no use to the single-item surface
                self.photos.cancel_pending();
            }
            self.load_visible()
        };
        (Effect::AssetsRemoved(removed), task)
    }

    /// Starts loads for everything the current layout shows.
    fn load_visible(&mut self) -> Task<Message> {
        let quality = self.display_quality();
        let task = if self.is_single_photo_mode() {
            if self.video.is_some() {
                return Task::none();
            }
            match self.assets.first() {
                Some(asset) => self.photos.request(asset, quality),
                None => Task::none(),
            }
        } else {
            self.photos.request_all(&self.assets, quality)
        };
        task.map(|loaded| Message::Photo(photo::Message::Loaded(loaded)))
    }

    fn teardown(&mut self) {
        self.visible = false;
        self.photos.teardown();
        self.selection.clear();
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let locked = self.controls_locked();
        let single = self.is_single_photo_mode();

        let body: Element<'a, Message> = match (&self.video, single) {
            (Some(video), true) => video_surface::view(video, env.i18n),
            (None, true) => match self.assets.first() {
                Some(asset) => photo_view::view(asset, &self.photos, env.i18n),
                None => photo_view::empty(env.i18n),
            },
            (_, false) => grid::view(grid::ViewContext {
                assets: &self.assets,
                photos: &self.photos,
                selection: &self.selection,
                locked,
                i18n: env.i18n,
            }),
        };

        let top = top_bar::view(top_bar::ViewContext {
            i18n: env.i18n,
            single_photo_mode: single,
            selection_mode: self.selection.is_selection_mode(),
            show_edit_button: self.shows_edit_button(),
            locked,
        });

        let bottom = bottom_bar::view(bottom_bar::ViewContext {
            i18n: env.i18n,
            comment: &self.comment,
            single_photo_mode: single,
            selection_mode: self.selection.is_selection_mode(),
            show_save_button: self.shows_save_button(),
            show_comment_box: self.config.show_comment_box,
            title: self.config.title.as_deref(),
            has_selection: !self.selection.is_empty(),
            locked,
        });

        let content = Column::new()
            .push(top)
            .push(
                Container::new(body)
                    .width(Length::Fill)
                    .height(Length::Fill),
            )
            .push(bottom)
            .width(Length::Fill)
            .height(Length::Fill);

        let mut stack = Stack::new().push(content);
        if self.upload.phase().shows_overlay() {
            if let Some(progress) = self.upload.progress() {
                stack = stack.push(upload_overlay::view(progress, env.i18n, env.is_dark_theme));
            }
        }

        stack.width(Length::Fill).height(Length::Fill).into()
    }
}
