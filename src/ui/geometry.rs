// SPDX-License-Identifier: MPL-2.0
//! Edge insets and edge pinning.
//!
//! A child pinned to its parent's edges fills the parent minus the insets.

use iced::{Padding, Rectangle};

/// Distances from each edge of a containing rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f32,
    pub left: f32,
    pub bottom: f32,
    pub right: f32,
}

impl Insets {
    pub const ZERO: Insets = Insets::new(0.0, 0.0, 0.0, 0.0);

    #[must_use]
    pub const fn new(top: f32, left: f32, bottom: f32, right: f32) -> Self {
        Self {
            top,
            left,
            bottom,
            right,
        }
    }

    #[must_use]
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    #[must_use]
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }

    /// Rectangle occupied by a child pinned to all four edges of `parent`.
    ///
    /// Width and height never go negative.
    #[must_use]
    pub fn pin(&self, parent: Rectangle) -> Rectangle {
        Rectangle {
            x: parent.x + self.left,
            y: parent.y + self.top,
            width: (parent.width - self.horizontal()).max(0.0),
            height: (parent.height - self.vertical()).max(0.0),
        }
    }

    /// Width left for content inside a container of `width`.
    #[must_use]
    pub fn inner_width(&self, width: f32) -> f32 {
        (width - self.horizontal()).max(0.0)
    }
}

impl From<Insets> for Padding {
    fn from(insets: Insets) -> Self {
        Padding {
            top: insets.top,
            right: insets.right,
            bottom: insets.bottom,
            left: insets.left,
        }
    }
}
