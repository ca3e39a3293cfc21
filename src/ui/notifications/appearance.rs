// SPDX-License-Identifier: MPL-2.0
//! Banner layout and style constants and the values derived from them.
//!
//! Everything here is a pure function of the [`Appearance`] and the content
//! being displayed. Heights depend on the width the banner gets, because the
//! message wraps.
//!
//! ```text
//! ┌──────────────────────────────────────────┐  ─┬─ icon_margin.top
//! │ [icon] SOURCE                      time  │   │  icon_size.height
//! │ **Title**                                │  ─┼─ message_margin.top
//! │ message body, wrapped up to the line cap │   │  lines × line height
//! └──────────────────────────────────────────┘  ─┴─ message_margin.bottom
//! ```

use super::content::NotificationContent;
use crate::config::{BackgroundStyle, BannerConfig};
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use crate::ui::geometry::Insets;
use iced::{Color, Point, Rectangle, Shadow, Size};
use std::time::Duration;

/// Estimates how many lines a string occupies when wrapped.
pub trait TextMeasure {
    /// Number of lines `text` wraps to at `font_size` within `max_width`.
    ///
    /// Empty text takes zero lines.
    fn line_count(&self, text: &str, font_size: f32, max_width: f32) -> u32;
}

/// Greedy word wrap assuming every glyph advances by `ratio × font_size`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphAdvance {
    pub ratio: f32,
}

impl Default for GlyphAdvance {
    fn default() -> Self {
        Self { ratio: 0.5 }
    }
}

impl GlyphAdvance {
    fn columns(&self, font_size: f32, max_width: f32) -> usize {
        let advance = (font_size * self.ratio).max(f32::EPSILON);
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let columns = (max_width / advance).floor().max(1.0) as usize;
        columns
    }
}

fn wrapped_lines(paragraph: &str, columns: usize) -> usize {
    let mut lines = 1;
    let mut column = 0;

    for word in paragraph.split_whitespace() {
        let len = word.chars().count();
        let needed = if column == 0 { len } else { column + 1 + len };
        if needed <= columns {
            column = needed;
            continue;
        }
        if column > 0 {
            lines += 1;
        }
        // Words longer than a line are broken anywhere.
        let overflow = (len - 1) / columns;
        lines += overflow;
        column = len - overflow * columns;
    }

    lines
}

impl TextMeasure for GlyphAdvance {
    fn line_count(&self, text: &str, font_size: f32, max_width: f32) -> u32 {
        if text.is_empty() {
            return 0;
        }
        let columns = self.columns(font_size, max_width);
        let lines: usize = text.split('\n').map(|p| wrapped_lines(p, columns)).sum();
        u32::try_from(lines).unwrap_or(u32::MAX)
    }
}

/// Weight of a [`Fragment`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Regular,
    Bold,
}

/// A run of text sharing one weight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    pub text: String,
    pub emphasis: Emphasis,
}

/// Title and message joined into one styled text block.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ComposedMessage {
    fragments: Vec<Fragment>,
}

impl ComposedMessage {
    #[must_use]
    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// The text with styling stripped.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.fragments.iter().map(|f| f.text.as_str()).collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fragments.is_empty()
    }
}

/// Style constants for a banner.
#[derive(Debug, Clone, PartialEq)]
pub struct Appearance {
    /// Corner radius of the card.
    pub corner_radius: f32,
    /// Distance from the surface edges; `top` is the resting offset.
    pub view_margin: Insets,
    /// Cap on the card width for wide windows.
    pub max_width: f32,
    pub icon_size: Size,
    pub icon_corner_radius: f32,
    /// Only `top` and `left` apply.
    pub icon_margin: Insets,
    /// Gap between the icon and the source label.
    pub source_label_spacing: f32,
    pub message_margin: Insets,
    /// Minimum gap between the source label and the timestamp, and the
    /// timestamp's distance from the trailing edge.
    pub time_margin: Insets,
    pub caption_font_size: f32,
    pub message_font_size: f32,
    /// Line height relative to the font size.
    pub line_height: f32,
    pub message_line_limit: u32,
    pub background: BackgroundStyle,
    pub shadow: Shadow,
    pub appearing_duration: Duration,
    pub animation_duration: Duration,
    pub return_animation_duration: Duration,
}

impl Default for Appearance {
    fn default() -> Self {
        Self::from_config(&BannerConfig::default())
    }
}

impl Appearance {
    /// Builds the appearance with timings, line cap and background from `config`.
    #[must_use]
    pub fn from_config(config: &BannerConfig) -> Self {
        Self {
            corner_radius: radius::BANNER,
            view_margin: Insets::new(spacing::XS, spacing::XS, 0.0, spacing::XS),
            max_width: sizing::BANNER_MAX_WIDTH,
            icon_size: Size::new(sizing::BANNER_ICON, sizing::BANNER_ICON),
            icon_corner_radius: radius::SM,
            icon_margin: Insets::new(spacing::SM, spacing::SM, 0.0, 0.0),
            source_label_spacing: spacing::XS,
            message_margin: Insets::new(spacing::XS, spacing::SM, spacing::SM, spacing::SM),
            time_margin: Insets::new(0.0, spacing::XS, 0.0, spacing::SM),
            caption_font_size: typography::CAPTION,
            message_font_size: typography::BODY,
            line_height: typography::LINE_HEIGHT,
            message_line_limit: config.message_line_limit(),
            background: config.background_style(),
            shadow: shadow::BANNER,
            appearing_duration: config.appearing_duration(),
            animation_duration: config.animation_duration(),
            return_animation_duration: config.return_animation_duration(),
        }
    }

    /// Top offset of a fully visible banner.
    #[must_use]
    pub fn resting_top_offset(&self) -> f32 {
        self.view_margin.top
    }

    /// Card width on a surface `surface_width` wide.
    #[must_use]
    pub fn banner_width(&self, surface_width: f32) -> f32 {
        self.view_margin.inner_width(surface_width).min(self.max_width)
    }

    /// Width available to the message label inside a card `width` wide.
    #[must_use]
    pub fn message_width(&self, width: f32) -> f32 {
        self.message_margin.inner_width(width)
    }

    /// Height of one message line.
    #[must_use]
    pub fn message_line_height(&self) -> f32 {
        self.message_font_size * self.line_height
    }

    /// Message lines actually shown, after the line cap.
    #[must_use]
    pub fn message_lines_with(
        &self,
        content: &NotificationContent,
        width: f32,
        measure: &impl TextMeasure,
    ) -> u32 {
        let text = self
            .composed_message_text(content.title(), content.message())
            .plain_text();
        measure
            .line_count(&text, self.message_font_size, self.message_width(width))
            .min(self.message_line_limit)
    }

    /// Card height for `content` in a card `width` wide, wrapping with `measure`.
    #[must_use]
    pub fn required_height_with(
        &self,
        content: &NotificationContent,
        width: f32,
        measure: &impl TextMeasure,
    ) -> f32 {
        #[allow(clippy::cast_precision_loss)]
        let message_height =
            self.message_lines_with(content, width, measure) as f32 * self.message_line_height();

        self.icon_margin.top
            + self.icon_size.height
            + self.message_margin.top
            + message_height
            + self.message_margin.bottom
    }

    /// Card height for `content` using the default [`GlyphAdvance`] wrapping.
    #[must_use]
    pub fn required_height(&self, content: &NotificationContent, width: f32) -> f32 {
        self.required_height_with(content, width, &GlyphAdvance::default())
    }

    /// Top offset that hides a banner of this content entirely, shadow included.
    #[must_use]
    pub fn offscreen_top_offset(&self, content: &NotificationContent, width: f32) -> f32 {
        -(self.required_height(content, width) + self.shadow.blur_radius + self.shadow.offset.y)
    }

    /// Off-screen starting rectangle on a surface `surface_width` wide.
    ///
    /// The card is pinned between the horizontal margins and centered there
    /// once it reaches `max_width`.
    #[must_use]
    pub fn initial_frame(&self, content: &NotificationContent, surface_width: f32) -> Rectangle {
        let width = self.banner_width(surface_width);
        let height = self.required_height(content, width);
        let lane = self.view_margin.pin(Rectangle::new(
            Point::ORIGIN,
            Size::new(surface_width, height + self.view_margin.vertical()),
        ));
        Rectangle {
            x: lane.x + (lane.width - width) / 2.0,
            y: self.offscreen_top_offset(content, width),
            width,
            height,
        }
    }

    /// Joins a bold title and a regular message into one text block.
    ///
    /// The title sits on its own line above the message. Without a title the
    /// message stands alone, unchanged.
    #[must_use]
    pub fn composed_message_text(&self, title: Option<&str>, message: Option<&str>) -> ComposedMessage {
        let mut fragments = Vec::with_capacity(2);

        match (title, message) {
            (Some(title), Some(_)) => fragments.push(Fragment {
                text: format!("{title}\n"),
                emphasis: Emphasis::Bold,
            }),
            (Some(title), None) => fragments.push(Fragment {
                text: title.to_owned(),
                emphasis: Emphasis::Bold,
            }),
            (None, _) => {}
        }
        if let Some(message) = message {
            fragments.push(Fragment {
                text: message.to_owned(),
                emphasis: Emphasis::Regular,
            });
        }

        ComposedMessage { fragments }
    }

    /// Card fill standing in for the platform blur material.
    #[must_use]
    pub fn background_color(&self) -> Color {
        match self.background {
            BackgroundStyle::Light => Color {
                a: opacity::FROSTED,
                ..palette::GRAY_100
            },
            BackgroundStyle::ExtraLight => Color {
                a: opacity::SURFACE,
                ..palette::WHITE
            },
            BackgroundStyle::Dark => Color {
                a: opacity::FROSTED,
                ..palette::GRAY_900
            },
            BackgroundStyle::Translucent => Color {
                a: opacity::TRANSLUCENT,
                ..palette::GRAY_200
            },
        }
    }

    fn is_dark(&self) -> bool {
        self.background == BackgroundStyle::Dark
    }

    #[must_use]
    pub fn source_label_color(&self) -> Color {
        if self.is_dark() {
            palette::GRAY_200
        } else {
            palette::GRAY_700
        }
    }

    #[must_use]
    pub fn message_color(&self) -> Color {
        if self.is_dark() {
            palette::WHITE
        } else {
            palette::BLACK
        }
    }

    #[must_use]
    pub fn time_color(&self) -> Color {
        if self.is_dark() {
            palette::GRAY_200
        } else {
            palette::GRAY_500
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, LAYOUT_EPSILON};

    const WIDTH: f32 = 360.0;

    fn lines(n: usize) -> NotificationContent {
        let body = vec!["line"; n].join("\n");
        NotificationContent::new().with_message(body)
    }

    #[test]
    fn composed_text_with_title_and_message_contains_both() {
        let composed = Appearance::default().composed_message_text(Some("A"), Some("B"));
        let fragments = composed.fragments();

        assert_eq!(fragments.len(), 2);
        assert_eq!(fragments[0].emphasis, Emphasis::Bold);
        assert_eq!(fragments[1].emphasis, Emphasis::Regular);
        assert!(fragments[0].text.contains('A'));
        assert_eq!(fragments[1].text, "B");
        assert_eq!(composed.plain_text(), "A\nB");
    }

    #[test]
    fn composed_text_without_title_is_message_verbatim() {
        let composed = Appearance::default().composed_message_text(None, Some("just this"));
        assert_eq!(composed.fragments().len(), 1);
        assert_eq!(composed.plain_text(), "just this");
        assert_eq!(composed.fragments()[0].emphasis, Emphasis::Regular);
    }

    #[test]
    fn composed_text_title_only_is_bold_without_break() {
        let composed = Appearance::default().composed_message_text(Some("Heads up"), None);
        assert_eq!(composed.plain_text(), "Heads up");
        assert_eq!(composed.fragments()[0].emphasis, Emphasis::Bold);
    }

    #[test]
    fn composed_text_empty_when_nothing_given() {
        assert!(Appearance::default().composed_message_text(None, None).is_empty());
    }

    #[test]
    fn required_height_is_monotonic_up_to_cap_then_constant() {
        let appearance = Appearance::default();
        let cap = appearance.message_line_limit as usize;

        let heights: Vec<f32> = (0..=cap + 3)
            .map(|n| appearance.required_height(&lines(n), WIDTH))
            .collect();

        for pair in heights[..=cap].windows(2) {
            assert!(pair[1] >= pair[0]);
        }
        for height in &heights[cap..] {
            assert_abs_diff_eq!(*height, heights[cap], epsilon = LAYOUT_EPSILON);
        }
    }

    #[test]
    fn each_line_adds_one_line_height_below_cap() {
        let appearance = Appearance::default();
        let one = appearance.required_height(&lines(1), WIDTH);
        let two = appearance.required_height(&lines(2), WIDTH);
        assert_abs_diff_eq!(two - one, appearance.message_line_height(), epsilon = LAYOUT_EPSILON);
    }

    #[test]
    fn empty_content_is_header_and_margins_only() {
        let appearance = Appearance::default();
        let expected = appearance.icon_margin.top
            + appearance.icon_size.height
            + appearance.message_margin.top
            + appearance.message_margin.bottom;
        assert_abs_diff_eq!(
            appearance.required_height(&NotificationContent::new(), WIDTH),
            expected,
            epsilon = LAYOUT_EPSILON
        );
    }

    #[test]
    fn long_message_wraps_to_cap() {
        let appearance = Appearance::default();
        let content = NotificationContent::new().with_message("word ".repeat(400));
        assert_eq!(
            appearance.message_lines_with(&content, WIDTH, &GlyphAdvance::default()),
            appearance.message_line_limit
        );
    }

    #[test]
    fn offscreen_offset_hides_whole_card() {
        let appearance = Appearance::default();
        let content = lines(3);
        let height = appearance.required_height(&content, WIDTH);
        let offscreen = appearance.offscreen_top_offset(&content, WIDTH);
        assert!(offscreen + height <= 0.0);
        assert!(offscreen < appearance.resting_top_offset());
    }

    #[test]
    fn initial_frame_starts_offscreen_and_is_centered() {
        let appearance = Appearance::default();
        let content = lines(1);
        let surface_width = 1200.0;
        let frame = appearance.initial_frame(&content, surface_width);

        assert_abs_diff_eq!(frame.width, appearance.max_width, epsilon = LAYOUT_EPSILON);
        assert_abs_diff_eq!(frame.x * 2.0 + frame.width, surface_width, epsilon = LAYOUT_EPSILON);
        assert!(frame.y + frame.height <= 0.0);
    }

    #[test]
    fn narrow_surface_uses_margins() {
        let appearance = Appearance::default();
        let frame = appearance.initial_frame(&lines(1), 200.0);
        assert_abs_diff_eq!(frame.x, appearance.view_margin.left, epsilon = LAYOUT_EPSILON);
        assert_abs_diff_eq!(
            frame.width,
            200.0 - appearance.view_margin.horizontal(),
            epsilon = LAYOUT_EPSILON
        );
    }

    #[test]
    fn glyph_advance_wraps_words() {
        let measure = GlyphAdvance { ratio: 1.0 };
        // 10 columns at font size 1.0 and width 10.0
        assert_eq!(measure.line_count("", 1.0, 10.0), 0);
        assert_eq!(measure.line_count("hello", 1.0, 10.0), 1);
        assert_eq!(measure.line_count("hello world", 1.0, 10.0), 2);
        assert_eq!(measure.line_count("abcdefghijklmnopqrstuvwxy", 1.0, 10.0), 3);
        assert_eq!(measure.line_count("a\n\nb", 1.0, 10.0), 3);
    }

    #[test]
    fn config_values_flow_into_appearance() {
        let config = BannerConfig {
            appearing_secs: Some(9.0),
            message_lines: Some(2),
            background: Some(BackgroundStyle::Dark),
            ..BannerConfig::default()
        };
        let appearance = Appearance::from_config(&config);
        assert_eq!(appearance.appearing_duration, Duration::from_secs(9));
        assert_eq!(appearance.message_line_limit, 2);
        assert_eq!(appearance.message_color(), palette::WHITE);
    }

    #[test]
    fn background_styles_have_distinct_fills() {
        let fills: Vec<Color> = BackgroundStyle::ALL
            .iter()
            .map(|&background| {
                Appearance {
                    background,
                    ..Appearance::default()
                }
                .background_color()
            })
            .collect();
        for (i, a) in fills.iter().enumerate() {
            for b in &fills[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
