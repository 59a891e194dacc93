// SPDX-License-Identifier: MPL-2.0
//! Rendering of a single asset in its current load state.

use super::component::Message;
use super::subcomponents::photo::{self, Status};
use crate::domain::error::FetchError;
use crate::i18n::fluent::I18n;
use crate::media::{Asset, ImageData};
use crate::ui::design_tokens::{palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::AnimatedSpinner;
use iced::widget::{image::Image, Column, Container, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Single-item surface: the image fitted inside the available space.
pub fn view<'a>(asset: &'a Asset, photos: &'a photo::State, i18n: &I18n) -> Element<'a, Message> {
    let content: Element<'a, Message> = match photos.status(asset) {
        Status::Ready(image) => fitted(image, ContentFit::Contain),
        Status::Loading => loading(photos.spinner_rotation(), sizing::ICON_XL, Some(i18n)),
        Status::Failed(error) => failed(error, i18n, true),
    };

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .center(Length::Fill)
        .into()
}

/// Grid cell content: the image cropped to fill the cell.
pub fn thumbnail<'a>(
    asset: &'a Asset,
    photos: &'a photo::State,
    i18n: &I18n,
) -> Element<'a, Message> {
    match photos.status(asset) {
        Status::Ready(image) => fitted(image, ContentFit::Cover),
        Status::Loading => loading(photos.spinner_rotation(), sizing::ICON_LG, None),
        Status::Failed(error) => failed(error, i18n, false),
    }
}

/// Placeholder when there is nothing to display.
pub fn empty<'a>(i18n: &I18n) -> Element<'a, Message> {
    Container::new(Text::new(i18n.tr("viewer-empty")).size(typography::BODY_LG))
        .center(Length::Fill)
        .into()
}

fn fitted(image: &ImageData, fit: ContentFit) -> Element<'_, Message> {
    Image::new(image.handle.clone())
        .content_fit(fit)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn loading<'a>(rotation: f32, size: f32, i18n: Option<&I18n>) -> Element<'a, Message> {
    let spinner = AnimatedSpinner::new(palette::PRIMARY_500, rotation)
        .size(size)
        .into_element();

    let mut column = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(spinner);
    if let Some(i18n) = i18n {
        column = column.push(Text::new(i18n.tr("viewer-loading")).size(typography::BODY_SM));
    }

    Container::new(column)
        .style(styles::container::media_frame(radius::LG))
        .center(Length::Fill)
        .into()
}

fn failed<'a>(error: &FetchError, i18n: &I18n, detailed: bool) -> Element<'a, Message> {
    let icon_size = if detailed {
        typography::TITLE_LG
    } else {
        typography::TITLE_MD
    };
    let mut column = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("⚠").size(icon_size));
    if detailed {
        column = column.push(Text::new(i18n.tr(error.i18n_key())).size(typography::BODY));
    }

    Container::new(column)
        .style(styles::container::failure)
        .center(Length::Fill)
        .into()
}
