// SPDX-License-Identifier: MPL-2.0
//! Light/dark theme selection.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Colors the viewer paints with, per theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    pub error: Color,
    pub scrim: Color,
    pub overlay_background: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            error: palette::ERROR_500,
            scrim: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::BLACK
            },
            overlay_background: Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            error: palette::ERROR_500,
            scrim: Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            },
            overlay_background: Color {
                a: opacity::OVERLAY_HOVER,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Scheme matching the effective mode.
    #[must_use]
    pub fn for_mode(mode: ThemeMode) -> Self {
        if mode.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }

    /// Scheme matching an Iced theme, used by the style functions.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Default to dark on detection error
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Iced theme for this mode.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dark_theme_dims_more() {
        let (dark, light) = (ColorScheme::dark(), ColorScheme::light());
        assert!(dark.scrim.a > light.scrim.a);
        assert!(dark.overlay_background.a > light.overlay_background.a);
    }

    #[test]
    fn scheme_follows_iced_theme() {
        assert_eq!(
            ColorScheme::for_theme(&Theme::Dark).scrim,
            ColorScheme::dark().scrim
        );
        assert_eq!(
            ColorScheme::for_theme(&Theme::Light).scrim,
            ColorScheme::light().scrim
        );
    }

    #[test]
    fn explicit_modes_map_to_iced_themes() {
        assert_eq!(ThemeMode::Light.iced_theme(), Theme::Light);
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
        // System mode depends on the desktop; only check it resolves
        let _ = ThemeMode::System.iced_theme();
    }

    #[test]
    fn for_mode_follows_darkness() {
        assert_eq!(
            ColorScheme::for_mode(ThemeMode::Dark).overlay_background,
            ColorScheme::dark().overlay_background
        );
    }
}
