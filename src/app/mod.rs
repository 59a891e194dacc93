// SPDX-License-Identifier: MPL-2.0
//! Demo host application around the viewer.
//!
//! The `App` owns the asset collection and the shared upload state, opens the
//! viewer on demand and reacts to the effects it reports. Callbacks are wired
//! through [`HostCallbacks`] for logging; state changes are applied directly
//! from the effects.

pub mod items;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::application::port::SharedPhotoLibrary;
use crate::application::SharedUploadState;
use crate::config::{self, Config};
use crate::domain::asset::AssetId;
use crate::domain::media::VideoRef;
use crate::i18n::fluent::I18n;
use crate::infrastructure::{FsPhotoLibrary, SUPPORTED_EXTENSIONS};
use crate::media::{self, Asset, ImageData};
use crate::ui::theming::ThemeMode;
use crate::ui::viewer::{self, component, HostCallbacks, ViewerConfig};
use items::Item;
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::HashSet;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

/// Interval between simulated upload steps.
const UPLOAD_STEP_INTERVAL: Duration = Duration::from_millis(250);
/// Progress added per simulated step.
const UPLOAD_STEP: f64 = 0.1;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 480;
pub const MIN_WINDOW_WIDTH: u32 = 360;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    theme_mode: ThemeMode,
    library: Option<SharedPhotoLibrary>,
    /// The host-owned collection, synchronized from viewer effects.
    assets: Vec<Asset>,
    video: Option<VideoRef>,
    title: Option<String>,
    /// Last saved comment, prefilled when the viewer reopens.
    comment: Option<String>,
    upload_state: SharedUploadState,
    viewer: Option<component::State>,
    callbacks: HostCallbacks,
    /// Whether a simulated upload is advancing.
    uploading: bool,
    status: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("assets", &self.assets.len())
            .field("viewer_open", &self.viewer.is_some())
            .field("uploading", &self.uploading)
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires a `Fn` boot function; flags are cloned per call
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

/// Callbacks that only log; state changes are applied from effects.
fn logging_callbacks() -> HostCallbacks {
    HostCallbacks::new()
        .on_save(|comment, assets| {
            tracing::info!(count = assets.len(), comment, "viewer saved");
        })
        .on_close(|| tracing::info!("viewer closed"))
        .on_edit(|asset| tracing::info!(asset = %asset.id(), "edit requested"))
        .on_removed(|assets| tracing::info!(count = assets.len(), "assets removed"))
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let status = config_warning.map(|key| i18n.tr(&key));

        let fs_library = flags.library.clone().map(FsPhotoLibrary::new);
        let library = fs_library
            .clone()
            .map(|library| Arc::new(library) as SharedPhotoLibrary);

        let mut assets = Vec::new();
        let mut files = Vec::new();
        for raw in &flags.items {
            match Item::parse(raw) {
                Item::File(path) => files.push(path),
                Item::Library(reference) => assets.push(Asset::from_library(reference)),
                Item::Remote(url) => assets.push(Asset::from_url(url)),
            }
        }

        // A bare library directory shows everything it contains
        if flags.items.is_empty() {
            if let Some(fs_library) = &fs_library {
                match fs_library.list() {
                    Ok(references) => assets.extend(Asset::from_library_refs(references)),
                    Err(error) => tracing::warn!(%error, "cannot list photo library"),
                }
            }
        }

        let app = Self {
            i18n,
            theme_mode: config.general.theme_mode,
            config,
            library,
            assets,
            video: flags.video.as_deref().map(VideoRef::parse),
            title: flags.title,
            comment: None,
            upload_state: SharedUploadState::new(),
            viewer: None,
            callbacks: logging_callbacks(),
            uploading: false,
            status,
        };

        let task = if files.is_empty() {
            Task::none()
        } else {
            load_files(files)
        };
        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_viewer_subscription(self.viewer.as_ref())
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Viewer(msg) => {
                let Some(viewer) = self.viewer.as_mut() else {
                    return Task::none();
                };
                let (effect, task) = viewer.handle_message(msg);
                self.callbacks.dispatch(&effect);
                self.apply_effect(effect);
                task.map(Message::Viewer)
            }
            Message::OpenViewer => self.open_viewer(),
            Message::AddPhotos => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .add_filter("Images", SUPPORTED_EXTENSIONS)
                        .pick_files()
                        .await
                        .map(|handles| {
                            handles
                                .iter()
                                .map(|handle| handle.path().to_path_buf())
                                .collect()
                        })
                },
                Message::PhotosPicked,
            ),
            Message::PhotosPicked(Some(paths)) if !paths.is_empty() => load_files(paths),
            Message::PhotosPicked(_) => Task::none(),
            Message::PhotosLoaded(images) => {
                tracing::debug!(count = images.len(), "photos decoded");
                self.assets.extend(Asset::from_images(images));
                Task::none()
            }
            Message::SimulateUpload => {
                if self.uploading {
                    return Task::none();
                }
                let open = if self.viewer.is_none() {
                    self.open_viewer()
                } else {
                    Task::none()
                };
                self.uploading = true;
                self.upload_state.set_progress(Some(0.0));
                Task::batch([open, schedule_upload_step()])
            }
            Message::UploadStep => {
                if !self.uploading {
                    return Task::none();
                }
                let next = (self.upload_state.progress().unwrap_or(0.0) + UPLOAD_STEP).min(1.0);
                self.upload_state.set_progress(Some(next));
                if next >= 1.0 {
                    self.uploading = false;
                    Task::none()
                } else {
                    schedule_upload_step()
                }
            }
        }
    }

    fn open_viewer(&mut self) -> Task<Message> {
        let mut viewer_config = ViewerConfig::from_section(&self.config.viewer)
            .with_upload_state(self.upload_state.clone());
        viewer_config.title = self.title.clone();
        viewer_config.initial_comment = self.comment.clone();

        let mut viewer = component::State::new(
            self.assets.clone(),
            self.video.clone(),
            viewer_config,
            self.library.clone(),
        );
        let (_, task) = viewer.handle_message(component::Message::Appeared);
        self.viewer = Some(viewer);
        self.status = None;
        task.map(Message::Viewer)
    }

    fn apply_effect(&mut self, effect: viewer::Effect) {
        match effect {
            viewer::Effect::None => {}
            viewer::Effect::Save { comment, assets } => {
                let count = assets.len().to_string();
                self.status = Some(self.i18n.tr_with_args(
                    "demo-saved-status",
                    &[("count", count.as_str()), ("comment", comment.as_str())],
                ));
                self.comment = Some(comment);
                self.assets = assets;
            }
            viewer::Effect::Edit(asset) => {
                let label = asset.id().to_string();
                self.status = Some(
                    self.i18n
                        .tr_with_args("demo-edit-status", &[("asset", label.as_str())]),
                );
                if let Some(edited) = asset.image().and_then(mirrored) {
                    self.replace_image(asset.id(), edited);
                }
            }
            viewer::Effect::AssetsRemoved(removed) => {
                let ids: HashSet<AssetId> = removed.iter().map(Asset::id).collect();
                self.assets.retain(|asset| !ids.contains(&asset.id()));
                let count = removed.len().to_string();
                self.status = Some(
                    self.i18n
                        .tr_with_args("demo-removed-status", &[("count", count.as_str())]),
                );
            }
            viewer::Effect::Close => self.close_viewer("demo-closed-status"),
            viewer::Effect::Dismiss => self.close_viewer("demo-dismissed-status"),
        }
    }

    /// Stores an edited image in both the collection and the open viewer.
    fn replace_image(&mut self, id: AssetId, image: ImageData) {
        if let Some(viewer) = self.viewer.as_mut() {
            viewer.replace_image(id, image.clone());
        }
        if let Some(asset) = self.assets.iter_mut().find(|asset| asset.id() == id) {
            asset.set_image(image);
        }
    }

    fn close_viewer(&mut self, status_key: &str) {
        if let Some(viewer) = self.viewer.take() {
            // Keep bits resolved while the viewer was open
            self.assets = viewer.assets().to_vec();
        }
        self.status = Some(self.i18n.tr(status_key));
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            viewer: self.viewer.as_ref(),
            asset_count: self.assets.len(),
            uploading: self.uploading,
            status: self.status.as_deref(),
            is_dark_theme: self.theme_mode.is_dark(),
        })
    }
}

fn schedule_upload_step() -> Task<Message> {
    Task::perform(
        async { tokio::time::sleep(UPLOAD_STEP_INTERVAL).await },
        |()| Message::UploadStep,
    )
}

/// Decodes files off the UI thread. Unreadable files are logged and skipped.
fn load_files(paths: Vec<PathBuf>) -> Task<Message> {
    Task::perform(
        async move {
            tokio::task::spawn_blocking(move || {
                paths
                    .iter()
                    .filter_map(|path| match media::load_image(path) {
                        Ok(image) => Some(image),
                        Err(error) => {
                            tracing::warn!(path = %path.display(), %error, "skipping photo");
                            None
                        }
                    })
                    .collect::<Vec<_>>()
            })
            .await
            .unwrap_or_default()
        },
        Message::PhotosLoaded,
    )
}

/// Stand-in for an external editor: mirrors the image horizontally.
fn mirrored(image: &ImageData) -> Option<ImageData> {
    let buffer =
        image_rs::RgbaImage::from_raw(image.width, image.height, image.rgba_bytes().to_vec())?;
    let flipped = image_rs::imageops::flip_horizontal(&buffer);
    Some(ImageData::from_rgba(
        flipped.width(),
        flipped.height(),
        flipped.into_raw(),
    ))
}
