// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the demo application.

use super::{Message, Sample};
use crate::ui::design_tokens::palette;
use crate::ui::notifications::{BannerHandle, Controller, NotificationContent, WindowSurface};
use iced::widget::image::Handle;
use iced::Task;
use std::time::Instant;

/// Number of delivered callbacks kept for display.
pub const LOG_CAPACITY: usize = 8;

/// Mutable application state the handlers work on.
pub struct UpdateContext<'a> {
    pub banners: &'a mut Controller<Message>,
    pub surface: &'a mut WindowSurface,
    pub shown: &'a mut u32,
    pub log: &'a mut Vec<String>,
}

/// Handles one message and returns the runtime work it produced.
pub fn update(ctx: &mut UpdateContext<'_>, message: Message) -> Task<Message> {
    match message {
        Message::Banner(event) => ctx.banners.update(event, ctx.surface),
        Message::Show(sample) => handle_show(ctx, sample),
        Message::Dismiss { animated } => {
            if let Some(handle) = ctx.banners.active() {
                ctx.banners.dismiss(
                    handle,
                    animated,
                    Some(Message::DismissCompleted),
                    ctx.surface,
                    Instant::now(),
                );
            }
        }
        Message::BannerTapped(n) => {
            tracing::info!(banner = n, "banner tapped");
            push_log(ctx.log, format!("Banner #{n} tapped"));
        }
        Message::BannerDismissed(n) => {
            tracing::info!(banner = n, "banner dismissed");
            push_log(ctx.log, format!("Banner #{n} dismissed"));
        }
        Message::DismissCompleted => push_log(ctx.log, "Dismiss completed".to_owned()),
        Message::WindowChanged(id, size) => {
            ctx.surface.set_window(id, size);
            ctx.banners.relayout(&*ctx.surface);
        }
        Message::WindowClosed => ctx.surface.clear_window(),
    }

    flush(ctx)
}

fn handle_show(ctx: &mut UpdateContext<'_>, sample: Sample) {
    *ctx.shown += 1;
    let n = *ctx.shown;

    let shown: Option<BannerHandle> = ctx.banners.show(
        Some(sample_content(sample, n)),
        Some(Message::BannerTapped(n)),
        Some(Message::BannerDismissed(n)),
        ctx.surface,
        Instant::now(),
    );
    if shown.is_none() {
        push_log(ctx.log, format!("Banner #{n} not shown: window unavailable"));
    }
}

/// Level changes and delivered banner messages, as runtime tasks.
fn flush(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let level = ctx.surface.take_task();
    let delivered = ctx.banners.take_messages().into_iter().map(Task::done);
    Task::batch(std::iter::once(level).chain(delivered))
}

fn push_log(log: &mut Vec<String>, entry: String) {
    log.push(entry);
    if log.len() > LOG_CAPACITY {
        let excess = log.len() - LOG_CAPACITY;
        log.drain(..excess);
    }
}

/// Demo content for `sample`, numbered `n`.
#[must_use]
pub fn sample_content(sample: Sample, n: u32) -> NotificationContent {
    let base = NotificationContent::new()
        .with_icon(sample_icon())
        .with_source_label("Notification Banner")
        .with_timestamp("now");

    match sample {
        Sample::Full => base
            .with_title(format!("Banner #{n}"))
            .with_message("Tap to open, or swipe up to dismiss."),
        Sample::TitleOnly => base.with_title(format!("Banner #{n}")),
        Sample::MessageOnly => base.with_message(format!("Banner #{n} has no title.")),
        Sample::Long => base.with_title(format!("Banner #{n}")).with_message(
            "This message is long enough to wrap across several lines. The banner grows \
             to fit it, up to the configured line limit, and anything beyond that is \
             cut off at the bottom edge of the card so the banner never covers too much \
             of the window underneath it.",
        ),
    }
}

fn sample_icon() -> Handle {
    const SIDE: u32 = 32;
    let rgba = palette::PRIMARY_500.into_rgba8();
    let pixels = (0..SIDE * SIDE).flat_map(|_| rgba).collect::<Vec<u8>>();
    Handle::from_rgba(SIDE, SIDE, pixels)
}
