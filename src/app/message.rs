// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::media::ImageData;
use crate::ui::viewer::component;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Viewer(component::Message),
    OpenViewer,
    /// Open the file picker to add photos to the collection.
    AddPhotos,
    PhotosPicked(Option<Vec<PathBuf>>),
    /// Decoded photos, in the order they were requested.
    PhotosLoaded(Vec<ImageData>),
    SimulateUpload,
    /// Advance the simulated upload by one step.
    UploadStep,
}

/// Runtime flags passed from the command line to the application.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override provided on the command line.
    pub lang: Option<String>,
    /// Directory served as the system photo library.
    pub library: Option<PathBuf>,
    /// Video bound to the viewer.
    pub video: Option<String>,
    /// Caption shown instead of the comment box.
    pub title: Option<String>,
    /// File paths, `lib:<id>` references or `http(s)://` URLs.
    pub items: Vec<String>,
}
