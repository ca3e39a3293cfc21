// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Design tokens shared by the banner and the demo host.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (4px grid)
- **Sizing**: Component sizes
- **Typography**: Font size scale
- **Radius**: Border radii
- **Shadow**: Shadow definitions

## Examples

```
use notification_banner::ui::design_tokens::{opacity, palette, spacing};
use iced::Color;

let frosted = Color {
    a: opacity::FROSTED,
    ..palette::WHITE
};

let padding = spacing::SM; // 10px
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_500: Color = Color::from_rgb(0.5, 0.5, 0.5);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.9, 0.9, 0.92);

    /// Accent of the demo's sample icon.
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SHADOW: f32 = 0.3;
    pub const TRANSLUCENT: f32 = 0.6;
    pub const FROSTED: f32 = 0.85;
    pub const SURFACE: f32 = 0.95;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing Scale
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 6.0;
    pub const SM: f32 = 10.0;
    pub const MD: f32 = 16.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// App icon shown in the banner header.
    pub const BANNER_ICON: f32 = 20.0;

    /// Widest a banner gets, regardless of window width.
    pub const BANNER_MAX_WIDTH: f32 = 420.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    //! Font sizes mirroring the system notification hierarchy.

    /// Demo headings.
    pub const TITLE_MD: f32 = 20.0;

    /// Message body.
    pub const BODY: f32 = 15.0;

    /// Source label and timestamp in the banner header.
    pub const CAPTION: f32 = 13.0;

    /// Relative line height applied to every banner text run.
    pub const LINE_HEIGHT: f32 = 1.3;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const SM: f32 = 5.0;
    pub const BANNER: f32 = 13.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::{opacity, palette};
    use iced::{Color, Shadow, Vector};

    /// Drop shadow under a floating banner.
    pub const BANNER: Shadow = Shadow {
        color: Color {
            a: opacity::SHADOW,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 6.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XXS > 0.0);
    assert!(spacing::XS > spacing::XXS);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::TRANSLUCENT < opacity::FROSTED);
    assert!(opacity::FROSTED < opacity::SURFACE);

    assert!(typography::BODY > typography::CAPTION);
    assert!(radius::BANNER > radius::SM);
};
