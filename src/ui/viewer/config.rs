// SPDX-License-Identifier: MPL-2.0
//! Host-supplied viewer configuration.

use crate::application::SharedUploadState;
use crate::config::{ViewerSection, DEFAULT_SETTLE_DELAY_MS, DEFAULT_THUMBNAIL_SIZE};
use crate::config::{DEFAULT_SHOW_COMMENT_BOX, DEFAULT_SHOW_EDIT_BUTTON, DEFAULT_SHOW_SAVE_BUTTON};
use std::time::Duration;

/// Options the host passes when opening a viewer.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Prefills the comment field.
    pub initial_comment: Option<String>,
    pub show_comment_box: bool,
    pub show_save_button: bool,
    pub show_edit_button: bool,
    /// Static caption shown when the comment box is hidden.
    pub title: Option<String>,
    /// Progress shared with the host. A private one is created when absent.
    pub shared_upload_state: Option<SharedUploadState>,
    /// Edge of grid thumbnails, in pixels.
    pub thumbnail_size: u32,
    pub settle_delay: Duration,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            initial_comment: None,
            show_comment_box: DEFAULT_SHOW_COMMENT_BOX,
            show_save_button: DEFAULT_SHOW_SAVE_BUTTON,
            show_edit_button: DEFAULT_SHOW_EDIT_BUTTON,
            title: None,
            shared_upload_state: None,
            thumbnail_size: DEFAULT_THUMBNAIL_SIZE,
            settle_delay: Duration::from_millis(DEFAULT_SETTLE_DELAY_MS),
        }
    }
}

impl ViewerConfig {
    /// Builds a configuration from the persisted `[viewer]` section.
    #[must_use]
    pub fn from_section(section: &ViewerSection) -> Self {
        Self {
            show_comment_box: section.show_comment_box.unwrap_or(DEFAULT_SHOW_COMMENT_BOX),
            show_save_button: section.show_save_button.unwrap_or(DEFAULT_SHOW_SAVE_BUTTON),
            show_edit_button: section.show_edit_button.unwrap_or(DEFAULT_SHOW_EDIT_BUTTON),
            thumbnail_size: section.thumbnail_size(),
            settle_delay: section.settle_delay(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_initial_comment(mut self, comment: impl Into<String>) -> Self {
        self.initial_comment = Some(comment.into());
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_upload_state(mut self, state: SharedUploadState) -> Self {
        self.shared_upload_state = Some(state);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_shows_every_control() {
        let config = ViewerConfig::default();
        assert!(config.show_comment_box);
        assert!(config.show_save_button);
        assert!(config.show_edit_button);
        assert!(config.shared_upload_state.is_none());
        assert_eq!(config.settle_delay, Duration::from_millis(300));
    }

    #[test]
    fn from_section_applies_overrides_and_clamps() {
        let section = ViewerSection {
            show_save_button: Some(false),
            thumbnail_size: Some(1),
            ..ViewerSection::default()
        };
        let config = ViewerConfig::from_section(&section);
        assert!(!config.show_save_button);
        assert!(config.show_comment_box);
        assert_eq!(config.thumbnail_size, crate::config::MIN_THUMBNAIL_SIZE);
    }

    #[test]
    fn builders_fill_optional_fields() {
        let shared = SharedUploadState::new();
        let config = ViewerConfig::default()
            .with_title("Holiday")
            .with_initial_comment("Beach")
            .with_upload_state(shared.clone());
        assert_eq!(config.title.as_deref(), Some("Holiday"));
        assert_eq!(config.initial_comment.as_deref(), Some("Beach"));
        assert!(config
            .shared_upload_state
            .is_some_and(|state| state.same_as(&shared)));
    }
}
