// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.

use super::{Message, Sample};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::notifications::Controller;
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub banners: &'a Controller<Message>,
    pub log: &'a [String],
    pub warning: Option<&'a str>,
}

/// Window content with the banner overlay on top.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let base = Container::new(controls(&ctx))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base)
        .push(ctx.banners.view().map(Message::Banner))
        .into()
}

fn controls<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let samples = Sample::ALL.into_iter().fold(
        Row::new().spacing(spacing::SM),
        |row, sample| row.push(button(Text::new(sample.label())).on_press(Message::Show(sample))),
    );

    let dismissals = Row::new()
        .spacing(spacing::SM)
        .push(button(Text::new("Dismiss")).on_press(Message::Dismiss { animated: true }))
        .push(button(Text::new("Dismiss now")).on_press(Message::Dismiss { animated: false }));

    let mut column = Column::new()
        .spacing(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .push(Text::new("Notification Banner").size(typography::TITLE_MD))
        .push(samples)
        .push(dismissals);

    if let Some(warning) = ctx.warning {
        column = column.push(Text::new(warning).size(typography::CAPTION));
    }

    let log = ctx.log.iter().rev().fold(Column::new().spacing(spacing::XXS), |log, entry| {
        log.push(Text::new(entry.as_str()).size(typography::CAPTION))
    });

    column.push(log).into()
}
