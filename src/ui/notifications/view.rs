// SPDX-License-Identifier: MPL-2.0
//! Banner card rendering.
//!
//! The card mirrors the layout [`Appearance`] measures: a header row with the
//! icon, source label and timestamp, then the composed title and message,
//! clipped to the measured height.

use super::appearance::{Appearance, ComposedMessage, Emphasis};
use super::banner::Banner;
use super::controller::{Controller, Event};
use iced::font::Weight;
use iced::widget::text::{LineHeight, Span};
use iced::widget::{container, mouse_area, pin, rich_text, span, Column, Container, Image, Row, Space, Stack, Text};
use iced::{alignment, Background, Border, Element, Font, Length, Theme};

impl<M> Controller<M> {
    /// Overlay holding every attached banner, positioned on the surface.
    ///
    /// Layer it above the host content, e.g. with a `Stack`.
    pub fn view(&self) -> Element<'_, Event> {
        let appearance = self.appearance();
        let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

        for banner in self.attached() {
            let card = mouse_area(card(appearance, banner)).on_press(Event::Pressed);
            layers = layers.push(pin(card).x(banner.frame.x).y(banner.top_offset));
        }

        layers.into()
    }
}

fn card<'a, M>(appearance: &'a Appearance, banner: &'a Banner<M>) -> Element<'a, Event> {
    let content = &banner.content;

    let mut header = Row::new()
        .align_y(alignment::Vertical::Center)
        .height(Length::Fixed(appearance.icon_size.height));

    if let Some(icon) = content.icon() {
        let icon = Image::new(icon.clone())
            .width(Length::Fixed(appearance.icon_size.width))
            .height(Length::Fixed(appearance.icon_size.height));
        let corner = appearance.icon_corner_radius;
        header = header
            .push(Container::new(icon).clip(true).style(move |_theme: &Theme| container::Style {
                border: Border {
                    radius: corner.into(),
                    ..Border::default()
                },
                ..container::Style::default()
            }))
            .push(Space::new().width(Length::Fixed(appearance.source_label_spacing)));
    }

    let label = content.source_label().unwrap_or_default();
    header = header.push(
        Text::new(label)
            .size(appearance.caption_font_size)
            .color(appearance.source_label_color())
            .width(Length::Fill),
    );

    if let Some(timestamp) = content.timestamp() {
        header = header
            .push(Space::new().width(Length::Fixed(appearance.time_margin.left)))
            .push(
                Text::new(timestamp)
                    .size(appearance.caption_font_size)
                    .color(appearance.time_color()),
            );
    }

    let header = Container::new(header).padding(iced::Padding {
        top: appearance.icon_margin.top,
        left: appearance.icon_margin.left,
        bottom: 0.0,
        right: appearance.time_margin.right,
    });

    let body = Container::new(message(appearance, &banner.composed))
        .padding(appearance.message_margin)
        .width(Length::Fill);

    let style = card_style(appearance);

    Container::new(Column::new().push(header).push(body))
        .width(Length::Fixed(banner.frame.width))
        .height(Length::Fixed(banner.frame.height))
        .clip(true)
        .style(move |_theme: &Theme| style)
        .into()
}

fn message<'a>(appearance: &Appearance, composed: &'a ComposedMessage) -> Element<'a, Event> {
    let color = appearance.message_color();
    let spans: Vec<Span<'a, (), Font>> = composed
        .fragments()
        .iter()
        .map(|fragment| {
            let piece = span::<(), _>(fragment.text.as_str()).color(color);
            match fragment.emphasis {
                Emphasis::Bold => piece.font(Font {
                    weight: Weight::Bold,
                    ..Font::DEFAULT
                }),
                Emphasis::Regular => piece,
            }
        })
        .collect();

    rich_text(spans)
        .size(appearance.message_font_size)
        .line_height(LineHeight::Relative(appearance.line_height))
        .into()
}

/// Card container style for the banner's background style.
fn card_style(appearance: &Appearance) -> container::Style {
    container::Style {
        background: Some(Background::Color(appearance.background_color())),
        border: Border {
            radius: appearance.corner_radius.into(),
            ..Border::default()
        },
        shadow: appearance.shadow,
        text_color: Some(appearance.message_color()),
        ..container::Style::default()
    }
}
