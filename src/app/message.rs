// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use crate::config::BackgroundStyle;
use crate::ui::notifications;
use iced::{window, Size};

/// Runtime flags parsed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Background style overriding the configured one.
    pub background: Option<BackgroundStyle>,
}

/// Banner variants the demo can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    /// Title, message, icon and timestamp.
    Full,
    TitleOnly,
    MessageOnly,
    /// A message long enough to hit the line limit.
    Long,
}

impl Sample {
    pub const ALL: [Sample; 4] = [
        Sample::Full,
        Sample::TitleOnly,
        Sample::MessageOnly,
        Sample::Long,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Sample::Full => "Show banner",
            Sample::TitleOnly => "Title only",
            Sample::MessageOnly => "Message only",
            Sample::Long => "Long message",
        }
    }
}

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Overlay events from the banner controller.
    Banner(notifications::Event),
    Show(Sample),
    /// Dismiss the current banner, optionally without animation.
    Dismiss { animated: bool },
    /// Delivered when banner `n` was tapped.
    BannerTapped(u32),
    /// Delivered once banner `n` left the screen.
    BannerDismissed(u32),
    /// Delivered after an explicit dismiss completed.
    DismissCompleted,
    /// The host window became known or changed size.
    WindowChanged(window::Id, Size),
    WindowClosed,
}
