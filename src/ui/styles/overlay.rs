// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the upload progress card.

use crate::ui::design_tokens::{opacity, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Dimmed backdrop behind the progress card.
pub fn scrim(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(ColorScheme::for_theme(theme).scrim)),
        ..Default::default()
    }
}

/// Card holding the progress ring.
pub fn progress_card(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);

    container::Style {
        background: Some(Background::Color(scheme.overlay_background)),
        text_color: Some(scheme.overlay_text),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..scheme.overlay_text
            },
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::LG,
        ..Default::default()
    }
}
