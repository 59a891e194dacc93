// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid for multi-item mode.
//!
//! Cells have a fixed size and wrap to the available width. In selection
//! mode each cell carries a badge that toggles its membership.

use super::component::Message;
use super::photo_view;
use super::subcomponents::{photo, selection};
use crate::config::GRID_ITEM_SIZE;
use crate::i18n::fluent::I18n;
use crate::media::Asset;
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, scrollable, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub assets: &'a [Asset],
    pub photos: &'a photo::State,
    pub selection: &'a selection::State,
    pub locked: bool,
    pub i18n: &'a I18n,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let cells = ctx
        .assets
        .iter()
        .enumerate()
        .map(|(index, asset)| cell(&ctx, index, asset));

    let grid = Row::with_children(cells)
        .spacing(spacing::XS)
        .padding(spacing::MD)
        .wrap()
        .vertical_spacing(spacing::XS);

    scrollable(grid)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn cell<'a>(ctx: &ViewContext<'a>, index: usize, asset: &'a Asset) -> Element<'a, Message> {
    let thumbnail = Container::new(photo_view::thumbnail(asset, ctx.photos, ctx.i18n))
        .width(Length::Fixed(GRID_ITEM_SIZE))
        .height(Length::Fixed(GRID_ITEM_SIZE))
        .clip(true)
        .style(styles::container::media_frame(radius::LG));

    if !ctx.selection.is_selection_mode() {
        return thumbnail.into();
    }

    let selected = ctx.selection.is_selected(index);
    let mark = if selected { "✓" } else { "" };
    let badge = button(Text::new(mark).size(typography::CAPTION).center())
        .width(Length::Fixed(sizing::SELECTION_BADGE))
        .height(Length::Fixed(sizing::SELECTION_BADGE))
        .padding(0)
        .style(styles::button::selection_badge(selected))
        .on_press_maybe((!ctx.locked).then_some(Message::Selection(
            selection::Message::Toggle(index),
        )));

    let badge_layer = Container::new(badge)
        .width(Length::Fixed(GRID_ITEM_SIZE))
        .height(Length::Fixed(GRID_ITEM_SIZE))
        .padding(spacing::XXS)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top);

    Stack::new().push(thumbnail).push(badge_layer).into()
}
