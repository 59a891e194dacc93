// SPDX-License-Identifier: MPL-2.0
//! Upload progress overlay drawn above the whole viewer.

use super::component::Message;
use crate::domain::upload::UploadProgress;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::widgets::ProgressRing;
use iced::widget::{opaque, Column, Container, Text};
use iced::{alignment, Element, Length};

/// Scrim with a centered card holding the ring and the title.
///
/// The scrim swallows pointer input so nothing underneath reacts while an
/// upload is running.
pub fn view<'a>(
    progress: UploadProgress,
    i18n: &I18n,
    is_dark_theme: bool,
) -> Element<'a, Message> {
    let ring_color = if is_dark_theme {
        palette::PRIMARY_400
    } else {
        palette::PRIMARY_500
    };

    let card = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(ProgressRing::new(progress, ring_color).into_element())
        .push(Text::new(i18n.tr("viewer-upload-title")).size(typography::TITLE_SM));

    let card = Container::new(card)
        .width(Length::Fixed(sizing::PROGRESS_CARD_WIDTH))
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .style(styles::overlay::progress_card);

    opaque(
        Container::new(card)
            .center(Length::Fill)
            .style(styles::overlay::scrim),
    )
}
