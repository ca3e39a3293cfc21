// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use crate::ui::notifications::Controller;
use iced::{event, window, Subscription};

/// Window lifecycle events that make the banner surface (un)available.
pub fn create_window_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| match event {
        event::Event::Window(window::Event::Opened { size, .. }) => {
            Some(Message::WindowChanged(window_id, size))
        }
        event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowChanged(window_id, size))
        }
        event::Event::Window(window::Event::Closed) => Some(Message::WindowClosed),
        _ => None,
    })
}

/// Pointer events, and frames while a banner is on screen.
pub fn create_banner_subscription(banners: &Controller<Message>) -> Subscription<Message> {
    banners.subscription().map(Message::Banner)
}
