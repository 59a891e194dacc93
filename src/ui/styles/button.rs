// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (Save / Remove).
pub fn primary(theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        button::Status::Disabled => disabled(theme),
    }
}

/// Round outlined button used for close and edit.
pub fn circle(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
        _ => None,
    };
    let text_color = match status {
        button::Status::Disabled => palette::GRAY_400,
        _ if is_light => palette::GRAY_700,
        _ => palette::GRAY_200,
    };

    button::Style {
        background,
        text_color,
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Borderless text button (Select / Done).
pub fn text(theme: &Theme, status: button::Status) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    let text_color = match status {
        button::Status::Disabled => palette::GRAY_400,
        button::Status::Hovered | button::Status::Pressed => palette::PRIMARY_400,
        _ if is_light => palette::PRIMARY_600,
        _ => palette::PRIMARY_400,
    };

    button::Style {
        background: None,
        text_color,
        border: Border::default(),
        shadow: shadow::NONE,
        snap: true,
    }
}

/// Selection badge in the corner of a grid cell.
pub fn selection_badge(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let fill = if selected {
            palette::PRIMARY_500
        } else {
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::BLACK
            }
        };
        let fill = match status {
            button::Status::Hovered if !selected => Color {
                a: opacity::OVERLAY_STRONG,
                ..palette::BLACK
            },
            _ => fill,
        };

        button::Style {
            background: Some(Background::Color(fill)),
            text_color: WHITE,
            border: Border {
                color: WHITE,
                width: border::WIDTH_MD,
                radius: radius::FULL.into(),
            },
            shadow: shadow::SM,
            snap: true,
        }
    }
}

fn disabled(theme: &Theme) -> button::Style {
    let is_light = matches!(theme, Theme::Light);
    button::Style {
        background: Some(Background::Color(if is_light {
            palette::GRAY_200
        } else {
            palette::GRAY_700
        })),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primary_button_uses_brand_colors() {
        let style = primary(&Theme::Dark, button::Status::Active);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg, palette::PRIMARY_500);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn disabled_primary_is_grayed_out() {
        let style = primary(&Theme::Light, button::Status::Disabled);
        assert_eq!(style.text_color, palette::GRAY_400);
    }

    #[test]
    fn selection_badge_fill_depends_on_selection() {
        let on = selection_badge(true)(&Theme::Dark, button::Status::Active);
        let off = selection_badge(false)(&Theme::Dark, button::Status::Active);
        assert_ne!(on.background, off.background);
    }
}
