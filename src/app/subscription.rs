// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.

use super::Message;
use crate::ui::viewer::component;
use iced::Subscription;

/// Forwards the viewer's own subscriptions while it is open.
pub fn create_viewer_subscription(viewer: Option<&component::State>) -> Subscription<Message> {
    match viewer {
        Some(viewer) => viewer.subscription().map(Message::Viewer),
        None => Subscription::none(),
    }
}
