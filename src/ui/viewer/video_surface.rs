// SPDX-License-Identifier: MPL-2.0
//! Video surface for a bound video reference.
//!
//! Playback belongs to the host platform. The surface identifies the video
//! and leaves room where a player would be embedded.

use super::component::Message;
use crate::domain::media::VideoRef;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{radius, spacing, typography};
use crate::ui::styles;
use iced::widget::{Column, Container, Text};
use iced::{alignment, Element, Length};

pub fn view<'a>(video: &VideoRef, i18n: &I18n) -> Element<'a, Message> {
    let column = Column::new()
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("▶").size(typography::TITLE_LG))
        .push(Text::new(i18n.tr("viewer-video-label")).size(typography::CAPTION))
        .push(Text::new(video.display_name()).size(typography::TITLE_SM))
        .push(Text::new(i18n.tr("viewer-video-hint")).size(typography::BODY_SM));

    Container::new(
        Container::new(column)
            .style(styles::container::media_frame(radius::MD))
            .center(Length::Fill),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
