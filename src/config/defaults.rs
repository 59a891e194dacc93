// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Viewer**: Which controls the viewer shows by default
//! - **Thumbnails**: Grid thumbnail request size and cell size
//! - **Upload**: Settle delay before auto-dismiss

// ==========================================================================
// Viewer Defaults
// ==========================================================================

/// Whether the comment field is shown in single-item mode.
pub const DEFAULT_SHOW_COMMENT_BOX: bool = true;

/// Whether the save button is shown.
pub const DEFAULT_SHOW_SAVE_BUTTON: bool = true;

/// Whether the edit button is shown in single-item mode.
pub const DEFAULT_SHOW_EDIT_BUTTON: bool = true;

// ==========================================================================
// Thumbnail Defaults
// ==========================================================================

/// Edge length in pixels requested from the library for grid thumbnails.
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 150;

/// Minimum thumbnail edge length.
pub const MIN_THUMBNAIL_SIZE: u32 = 32;

/// Maximum thumbnail edge length.
pub const MAX_THUMBNAIL_SIZE: u32 = 1024;

/// Rendered size of a grid cell in logical pixels.
pub const GRID_ITEM_SIZE: f32 = 110.0;

// ==========================================================================
// Upload Defaults
// ==========================================================================

/// Pause after upload reaches 100% before the viewer dismisses itself.
pub const DEFAULT_SETTLE_DELAY_MS: u64 = 300;

/// Minimum settle delay.
pub const MIN_SETTLE_DELAY_MS: u64 = 0;

/// Maximum settle delay.
pub const MAX_SETTLE_DELAY_MS: u64 = 5_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Thumbnail validation
    assert!(MIN_THUMBNAIL_SIZE > 0);
    assert!(MAX_THUMBNAIL_SIZE > MIN_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE >= MIN_THUMBNAIL_SIZE);
    assert!(DEFAULT_THUMBNAIL_SIZE <= MAX_THUMBNAIL_SIZE);
    assert!(GRID_ITEM_SIZE > 0.0);

    // Settle delay validation
    assert!(MAX_SETTLE_DELAY_MS >= MIN_SETTLE_DELAY_MS);
    assert!(DEFAULT_SETTLE_DELAY_MS >= MIN_SETTLE_DELAY_MS);
    assert!(DEFAULT_SETTLE_DELAY_MS <= MAX_SETTLE_DELAY_MS);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn viewer_defaults_show_everything() {
        assert!(DEFAULT_SHOW_COMMENT_BOX);
        assert!(DEFAULT_SHOW_SAVE_BUTTON);
        assert!(DEFAULT_SHOW_EDIT_BUTTON);
    }

    #[test]
    fn thumbnail_defaults_are_valid() {
        assert_eq!(DEFAULT_THUMBNAIL_SIZE, 150);
        assert!(DEFAULT_THUMBNAIL_SIZE >= MIN_THUMBNAIL_SIZE);
        assert!(DEFAULT_THUMBNAIL_SIZE <= MAX_THUMBNAIL_SIZE);
    }

    #[test]
    fn settle_delay_default_is_valid() {
        assert_eq!(DEFAULT_SETTLE_DELAY_MS, 300);
        assert!(DEFAULT_SETTLE_DELAY_MS <= MAX_SETTLE_DELAY_MS);
    }
}
