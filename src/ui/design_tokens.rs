// SPDX-License-Identifier: MPL-2.0
//! Shared visual constants for the viewer and the demo host.
//!
//! Styles and views read sizes and colors from here instead of repeating
//! literals. Spacing sits on a 4px step, radii and typography on small
//! hand-picked scales. The `const` block at the end rejects edits that
//! break the ordering of a scale.
//!
//! ```
//! use iced::Color;
//! use iced_gallery::ui::design_tokens::{opacity, palette, spacing};
//!
//! let dimmed = Color {
//!     a: opacity::OVERLAY_STRONG,
//!     ..palette::BLACK
//! };
//! let gutter = spacing::MD;
//! # let _ = (dimmed, gutter);
//! ```

use iced::Color;

/// Base colors.
pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    /// Secondary text on light surfaces.
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    /// Disabled controls.
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    /// Secondary text on dark surfaces.
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    /// Accent for primary buttons, the spinner and selected badges.
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);

    /// Failed loads.
    pub const ERROR_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
}

/// Alpha levels for black or white veils.
pub mod opacity {
    /// Light scrim and tinted backgrounds.
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    /// Upload card background in light mode.
    pub const OVERLAY_STRONG: f32 = 0.7;
    pub const OVERLAY_HOVER: f32 = 0.8;
}

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
}

pub mod sizing {
    /// Spinner in a grid cell.
    pub const ICON_LG: f32 = 32.0;
    /// Spinner in the single-photo view.
    pub const ICON_XL: f32 = 48.0;

    pub const BUTTON_HEIGHT: f32 = 36.0;

    /// Round top-bar buttons (close, edit).
    pub const CIRCLE_BUTTON: f32 = 36.0;

    /// Selection badge in the corner of a grid cell.
    pub const SELECTION_BADGE: f32 = 22.0;

    /// Diameter of the upload progress ring.
    pub const PROGRESS_RING: f32 = 96.0;

    pub const PROGRESS_RING_STROKE: f32 = 8.0;

    /// Width of the upload overlay card.
    pub const PROGRESS_CARD_WIDTH: f32 = 220.0;
}

/// Font sizes, largest first.
pub mod typography {
    /// Failure icon in the single-photo view.
    pub const TITLE_LG: f32 = 30.0;
    /// Failure icon in grid cells.
    pub const TITLE_MD: f32 = 20.0;
    /// Upload card title, video name and caption text.
    pub const TITLE_SM: f32 = 18.0;
    pub const BODY_LG: f32 = 16.0;
    pub const BODY: f32 = 14.0;
    pub const BODY_SM: f32 = 13.0;
    /// Top-bar labels and badge marks.
    pub const CAPTION: f32 = 12.0;
}

pub mod border {
    /// Hairlines: bar separators, button outlines, failure frames.
    pub const WIDTH_SM: f32 = 1.0;
    /// Selected badge rim.
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    /// Video frame.
    pub const MD: f32 = 8.0;
    /// Cards, grid cells and the photo frame.
    pub const LG: f32 = 12.0;
    /// Large enough to turn any button into a pill or circle.
    pub const FULL: f32 = 9999.0;
}

/// Drop shadows, from flat to floating.
pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 8.0,
    };

    /// Upload card.
    pub const LG: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 8.0 },
        blur_radius: 16.0,
    };
}

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::OVERLAY_SUBTLE < opacity::OVERLAY_MEDIUM);
    assert!(opacity::OVERLAY_MEDIUM < opacity::OVERLAY_STRONG);
    assert!(opacity::OVERLAY_STRONG < opacity::OVERLAY_HOVER);
    assert!(opacity::OVERLAY_HOVER < 1.0);

    assert!(sizing::ICON_XL > sizing::ICON_LG);
    assert!(sizing::PROGRESS_RING > sizing::PROGRESS_RING_STROKE * 2.0);
    assert!(sizing::PROGRESS_CARD_WIDTH > sizing::PROGRESS_RING);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::TITLE_MD > typography::TITLE_SM);
    assert!(typography::TITLE_SM > typography::BODY_LG);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::BODY_SM);
    assert!(typography::BODY_SM > typography::CAPTION);

    assert!(border::WIDTH_MD > border::WIDTH_SM);
    assert!(radius::LG > radius::MD);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spacing_follows_four_pixel_steps() {
        for step in [spacing::XXS, spacing::XS, spacing::SM, spacing::MD, spacing::LG] {
            assert_eq!(step % 4.0, 0.0);
        }
    }

    #[test]
    fn progress_ring_fits_in_card() {
        assert!(sizing::PROGRESS_RING + spacing::MD * 2.0 <= sizing::PROGRESS_CARD_WIDTH);
    }
}
