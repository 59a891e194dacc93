// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Without an open viewer the window shows a small launcher. With one, the
//! viewer fills the window below a strip of host actions.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::viewer::component::{self, ViewEnv};
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub viewer: Option<&'a component::State>,
    pub asset_count: usize,
    pub uploading: bool,
    pub status: Option<&'a str>,
    pub is_dark_theme: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    match ctx.viewer {
        Some(viewer) => view_viewer(viewer, &ctx),
        None => view_launcher(&ctx),
    }
}

fn upload_button<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    button(Text::new(ctx.i18n.tr("demo-simulate-upload")).size(typography::BODY_SM))
        .style(styles::button::text)
        .on_press_maybe((!ctx.uploading).then_some(Message::SimulateUpload))
        .into()
}

fn view_viewer<'a>(viewer: &'a component::State, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let actions = Row::new()
        .padding([spacing::XXS, spacing::MD])
        .push(Space::new().width(Length::Fill))
        .push(upload_button(ctx));

    let viewer = viewer
        .view(ViewEnv {
            i18n: ctx.i18n,
            is_dark_theme: ctx.is_dark_theme,
        })
        .map(Message::Viewer);

    Column::new()
        .push(actions)
        .push(viewer)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_launcher<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let count = ctx.asset_count.to_string();

    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("window-title")).size(typography::TITLE_LG))
        .push(
            Text::new(
                ctx.i18n
                    .tr_with_args("demo-asset-count", &[("count", count.as_str())]),
            )
            .size(typography::BODY),
        )
        .push(
            button(Text::new(ctx.i18n.tr("demo-open-viewer")))
                .style(styles::button::primary)
                .padding([spacing::XS, spacing::LG])
                .on_press(Message::OpenViewer),
        )
        .push(
            button(Text::new(ctx.i18n.tr("demo-add-photos")))
                .style(styles::button::text)
                .on_press(Message::AddPhotos),
        )
        .push(upload_button(ctx));

    if let Some(status) = ctx.status {
        column = column.push(Text::new(status).size(typography::BODY_SM));
    }

    Container::new(column)
        .center(Length::Fill)
        .padding(spacing::LG)
        .into()
}
