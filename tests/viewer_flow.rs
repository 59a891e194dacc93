// SPDX-License-Identifier: MPL-2.0
//! End-to-end viewer flows driven through the public message API.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use iced_gallery::application::SharedUploadState;
use iced_gallery::domain::asset::LibraryRef;
use iced_gallery::domain::media::VideoRef;
use iced_gallery::media::{Asset, ImageData};
use iced_gallery::ui::viewer::subcomponents::{selection, upload};
use iced_gallery::ui::viewer::{Effect, HostCallbacks, Message, State, ViewerConfig};

fn pixel() -> ImageData {
    ImageData::from_rgba(1, 1, vec![10, 20, 30, 255])
}

fn open(assets: Vec<Asset>, config: ViewerConfig) -> State {
    let mut viewer = State::new(assets, None, config, None);
    let _ = viewer.handle_message(Message::Appeared);
    viewer
}

fn select(viewer: &mut State, indices: &[usize]) {
    let _ = viewer.handle_message(Message::Selection(selection::Message::ToggleMode));
    for &index in indices {
        let _ = viewer.handle_message(Message::Selection(selection::Message::Toggle(index)));
    }
}

#[test]
fn deleting_first_and_last_of_three_keeps_middle() {
    let assets = Asset::from_images([pixel(), pixel(), pixel()]);
    let (a, b, c) = (assets[0].clone(), assets[1].clone(), assets[2].clone());
    let mut viewer = open(assets, ViewerConfig::default());

    select(&mut viewer, &[0, 2]);
    let (effect, _) = viewer.handle_message(Message::RemoveSelected);

    let Effect::AssetsRemoved(removed) = effect else {
        panic!("expected removal effect");
    };
    assert_eq!(removed.len(), 2);
    assert!(removed.contains(&a) && removed.contains(&c));
    assert_eq!(viewer.assets(), &[b]);
    assert!(viewer.is_single_photo_mode());
}

#[test]
fn stale_selection_index_removes_nothing() {
    let assets = Asset::from_images([pixel(), pixel()]);
    let mut viewer = open(assets.clone(), ViewerConfig::default());

    select(&mut viewer, &[5]);
    let (effect, _) = viewer.handle_message(Message::RemoveSelected);

    assert!(matches!(effect, Effect::None));
    assert_eq!(viewer.assets(), assets.as_slice());
    assert!(!viewer.is_selection_mode());
}

#[test]
fn removing_everything_dismisses_through_callbacks() {
    let closed = Rc::new(Cell::new(0));
    let removed = Rc::new(Cell::new(0));
    let callbacks = {
        let closed = closed.clone();
        let removed = removed.clone();
        HostCallbacks::new()
            .on_close(move || closed.set(closed.get() + 1))
            .on_removed(move |assets| removed.set(assets.len()))
    };

    let mut viewer = open(Asset::from_images([pixel(), pixel()]), ViewerConfig::default());
    select(&mut viewer, &[0, 1]);

    let (effect, _) = viewer.handle_message(Message::RemoveSelected);
    callbacks.dispatch(&effect);
    let (effect, _) = viewer.handle_message(Message::CollectionEmptied);
    callbacks.dispatch(&effect);

    assert_eq!(removed.get(), 2);
    assert_eq!(closed.get(), 1);
    assert!(viewer.assets().is_empty());
}

#[test]
fn upload_completion_dismisses_exactly_once_after_settle() {
    let shared = SharedUploadState::new();
    let config = ViewerConfig {
        settle_delay: Duration::ZERO,
        ..ViewerConfig::default()
    }
    .with_upload_state(shared.clone());
    let mut viewer = open(Asset::from_images([pixel()]), config);

    let mut dismissals = 0;
    for value in [None, Some(0.5), Some(1.0), Some(1.0)] {
        let (effect, _) =
            viewer.handle_message(Message::Upload(upload::Message::ProgressChanged(value)));
        assert!(!matches!(effect, Effect::Dismiss));
    }
    assert!(viewer.controls_locked());

    for _ in 0..3 {
        let (effect, _) = viewer.handle_message(Message::Upload(upload::Message::SettleElapsed));
        if matches!(effect, Effect::Dismiss) {
            dismissals += 1;
        }
    }
    assert_eq!(dismissals, 1);
    assert!(!viewer.is_visible());
}

#[test]
fn reopening_with_completed_upload_starts_idle() {
    let shared = SharedUploadState::with_progress(Some(1.0));
    let viewer = open(
        Asset::from_images([pixel()]),
        ViewerConfig::default().with_upload_state(shared.clone()),
    );

    assert_eq!(shared.progress(), None);
    assert!(!viewer.upload().phase().shows_overlay());
}

#[test]
fn video_only_viewer_uses_single_layout() {
    let viewer = State::new(
        Vec::new(),
        Some(VideoRef::parse("clip.mp4")),
        ViewerConfig::default(),
        None,
    );
    assert!(viewer.is_single_photo_mode());
    assert!(!viewer.shows_edit_button());
    assert_eq!(viewer.video().map(VideoRef::display_name).as_deref(), Some("clip.mp4"));
}

#[test]
fn unresolvable_asset_fails_without_fetching() {
    let mut asset = Asset::from_image(pixel());
    asset.clear_image();
    let mut viewer = open(vec![asset], ViewerConfig::default());

    assert!(!viewer.photos().is_loading());
    let first = &viewer.assets()[0];
    assert!(matches!(
        viewer.photos().status(first),
        iced_gallery::ui::viewer::subcomponents::photo::Status::Failed(_)
    ));
    let _ = viewer.handle_message(Message::Disappeared);
}

#[test]
fn library_assets_start_loading_on_appear() {
    let assets = Asset::from_library_refs([LibraryRef::new("a.png"), LibraryRef::new("b.png")]);
    let viewer = open(assets, ViewerConfig::default());
    assert!(viewer.photos().is_loading());
}
