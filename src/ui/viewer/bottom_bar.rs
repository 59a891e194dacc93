// SPDX-License-Identifier: MPL-2.0
//! Bottom bar: comment field or title, and the save/remove button.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, rule, text_input, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub comment: &'a str,
    pub single_photo_mode: bool,
    pub selection_mode: bool,
    pub show_save_button: bool,
    pub show_comment_box: bool,
    pub title: Option<&'a str>,
    /// Remove is only useful with something selected.
    pub has_selection: bool,
    pub locked: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut row = Row::new()
        .spacing(spacing::SM)
        .padding([spacing::SM, spacing::MD])
        .align_y(Vertical::Center);

    if ctx.single_photo_mode {
        if ctx.show_comment_box {
            let placeholder = ctx.i18n.tr("viewer-comment-placeholder");
            let mut input = text_input(&placeholder, ctx.comment)
                .padding(spacing::XS)
                .size(typography::BODY)
                .width(Length::Fill);
            if !ctx.locked {
                input = input.on_input(Message::CommentChanged);
            }
            row = row.push(input);
        } else if let Some(title) = ctx.title {
            row = row
                .push(Text::new(title).size(typography::TITLE_SM))
                .push(Space::new().width(Length::Fill));
        } else {
            row = row.push(Space::new().width(Length::Fill));
        }
    } else {
        row = row.push(Space::new().width(Length::Fill));
    }

    if ctx.show_save_button {
        let (key, message) = if ctx.selection_mode {
            ("viewer-remove-button", Message::RemoveSelected)
        } else {
            ("viewer-save-button", Message::SaveRequested)
        };
        let active = !ctx.locked && (!ctx.selection_mode || ctx.has_selection);
        let action = button(Text::new(ctx.i18n.tr(key)).size(typography::BODY))
            .height(Length::Fixed(sizing::BUTTON_HEIGHT))
            .padding([spacing::XXS, spacing::MD])
            .style(styles::button::primary)
            .on_press_maybe(active.then_some(message));
        row = row.push(action);
    }

    let bar = Column::new().push(rule::horizontal(1)).push(row);

    Container::new(bar)
        .width(Length::Fill)
        .style(styles::container::bar)
        .into()
}
