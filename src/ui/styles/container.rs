// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, radius};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Bottom bar with a hairline separator on top.
pub fn bar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// Rounded frame around a photo or grid cell.
pub fn media_frame(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let base = theme.extended_palette().background.weak.color;
        container::Style {
            background: Some(Background::Color(base)),
            border: Border {
                radius: rad.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Placeholder for an item whose bits could not be fetched.
pub fn failure(theme: &Theme) -> container::Style {
    let error = ColorScheme::for_theme(theme).error;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..error
        })),
        text_color: Some(error),
        border: Border {
            color: error,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        ..Default::default()
    }
}
