// SPDX-License-Identifier: MPL-2.0
//! Top bar: close, edit and select/done controls.

use super::component::Message;
use super::subcomponents::selection;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub single_photo_mode: bool,
    pub selection_mode: bool,
    pub show_edit_button: bool,
    /// Upload in progress; every control is inert.
    pub locked: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let enabled = |message: Message| (!ctx.locked).then_some(message);

    let mut row = Row::new()
        .spacing(spacing::XS)
        .padding([spacing::SM, spacing::MD])
        .align_y(Vertical::Center);

    if !ctx.selection_mode {
        let close = button(Text::new("✕").size(typography::BODY_LG).center())
            .width(Length::Fixed(sizing::CIRCLE_BUTTON))
            .height(Length::Fixed(sizing::CIRCLE_BUTTON))
            .style(styles::button::circle)
            .on_press_maybe(enabled(Message::CloseRequested));
        row = row.push(iced::widget::tooltip(
            close,
            Text::new(ctx.i18n.tr("viewer-close-button")).size(typography::CAPTION),
            iced::widget::tooltip::Position::Bottom,
        ));
    }

    row = row.push(Space::new().width(Length::Fill));

    if ctx.single_photo_mode {
        if ctx.show_edit_button {
            let edit = button(Text::new("✎").size(typography::BODY_LG).center())
                .width(Length::Fixed(sizing::CIRCLE_BUTTON))
                .height(Length::Fixed(sizing::CIRCLE_BUTTON))
                .style(styles::button::circle)
                .on_press_maybe(enabled(Message::EditRequested));
            row = row.push(iced::widget::tooltip(
                edit,
                Text::new(ctx.i18n.tr("viewer-edit-button")).size(typography::CAPTION),
                iced::widget::tooltip::Position::Bottom,
            ));
        }
    } else {
        let key = if ctx.selection_mode {
            "viewer-done-button"
        } else {
            "viewer-select-button"
        };
        let toggle = button(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
            .style(styles::button::text)
            .on_press_maybe(enabled(Message::Selection(selection::Message::ToggleMode)));
        row = row.push(toggle);
    }

    row.into()
}
