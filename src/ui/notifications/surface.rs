// SPDX-License-Identifier: MPL-2.0
//! The display surface a banner is attached to.
//!
//! The controller only needs four primitives and the surface width:
//! attach and detach an overlay, and raise the host window above normal
//! content while a banner is up, then restore it.

use super::banner::BannerId;
use iced::{window, Size, Task};

/// Host-side primitives the banner controller drives.
pub trait Surface {
    /// Width available for banners, or `None` while the surface is unavailable.
    fn width(&self) -> Option<f32>;

    fn attach(&mut self, id: BannerId);

    fn detach(&mut self, id: BannerId);

    /// Raises the surface above normal content.
    fn elevate(&mut self);

    /// Returns the surface to its base elevation.
    fn restore(&mut self);
}

/// [`Surface`] backed by an iced window.
///
/// Elevation maps to the window level. Level changes are queued and handed
/// to the runtime through [`WindowSurface::take_task`].
#[derive(Debug, Default)]
pub struct WindowSurface {
    window: Option<window::Id>,
    size: Option<Size>,
    attached: Option<BannerId>,
    pending_level: Option<window::Level>,
}

impl WindowSurface {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the window hosting banners and its current size.
    pub fn set_window(&mut self, id: window::Id, size: Size) {
        self.window = Some(id);
        self.size = Some(size);
    }

    /// Forgets the window, making the surface unavailable.
    pub fn clear_window(&mut self) {
        self.window = None;
        self.size = None;
    }

    #[must_use]
    pub fn attached(&self) -> Option<BannerId> {
        self.attached
    }

    /// Runtime task applying the latest queued level change, if any.
    pub fn take_task<T: Send + 'static>(&mut self) -> Task<T> {
        match (self.window, self.pending_level.take()) {
            (Some(id), Some(level)) => window::set_level(id, level),
            _ => Task::none(),
        }
    }
}

impl Surface for WindowSurface {
    fn width(&self) -> Option<f32> {
        self.window.and(self.size).map(|size| size.width)
    }

    fn attach(&mut self, id: BannerId) {
        self.attached = Some(id);
    }

    fn detach(&mut self, id: BannerId) {
        if self.attached == Some(id) {
            self.attached = None;
        }
    }

    fn elevate(&mut self) {
        self.pending_level = Some(window::Level::AlwaysOnTop);
    }

    fn restore(&mut self) {
        self.pending_level = Some(window::Level::Normal);
    }
}

/// Operations recorded by a [`HeadlessSurface`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceOp {
    Attach(BannerId),
    Detach(BannerId),
    Elevate,
    Restore,
}

/// [`Surface`] without a window, for headless hosts and tests.
///
/// Records every operation and tracks the largest number of banners that
/// were ever attached at once.
#[derive(Debug, Clone)]
pub struct HeadlessSurface {
    width: Option<f32>,
    attached: Vec<BannerId>,
    max_attached: usize,
    elevated: bool,
    ops: Vec<SurfaceOp>,
}

impl HeadlessSurface {
    #[must_use]
    pub fn new(width: f32) -> Self {
        Self {
            width: Some(width),
            attached: Vec::new(),
            max_attached: 0,
            elevated: false,
            ops: Vec::new(),
        }
    }

    /// A surface that reports itself unavailable.
    #[must_use]
    pub fn unavailable() -> Self {
        Self {
            width: None,
            ..Self::new(0.0)
        }
    }

    pub fn set_available(&mut self, width: Option<f32>) {
        self.width = width;
    }

    #[must_use]
    pub fn attached(&self) -> &[BannerId] {
        &self.attached
    }

    #[must_use]
    pub fn max_attached(&self) -> usize {
        self.max_attached
    }

    #[must_use]
    pub fn is_elevated(&self) -> bool {
        self.elevated
    }

    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }
}

impl Surface for HeadlessSurface {
    fn width(&self) -> Option<f32> {
        self.width
    }

    fn attach(&mut self, id: BannerId) {
        self.ops.push(SurfaceOp::Attach(id));
        self.attached.push(id);
        self.max_attached = self.max_attached.max(self.attached.len());
    }

    fn detach(&mut self, id: BannerId) {
        self.ops.push(SurfaceOp::Detach(id));
        self.attached.retain(|&a| a != id);
    }

    fn elevate(&mut self) {
        self.ops.push(SurfaceOp::Elevate);
        self.elevated = true;
    }

    fn restore(&mut self) {
        self.ops.push(SurfaceOp::Restore);
        self.elevated = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_surface_is_unavailable_until_window_known() {
        let mut surface = WindowSurface::new();
        assert_eq!(surface.width(), None);

        surface.set_window(window::Id::unique(), Size::new(640.0, 480.0));
        assert_eq!(surface.width(), Some(640.0));

        surface.clear_window();
        assert_eq!(surface.width(), None);
    }

    #[test]
    fn window_surface_detach_ignores_other_ids() {
        let mut surface = WindowSurface::new();
        let a = BannerId::new();
        let b = BannerId::new();
        surface.attach(a);
        surface.detach(b);
        assert_eq!(surface.attached(), Some(a));
        surface.detach(a);
        assert_eq!(surface.attached(), None);
    }

    #[test]
    fn headless_surface_tracks_peak_attachment() {
        let mut surface = HeadlessSurface::new(400.0);
        let a = BannerId::new();
        let b = BannerId::new();
        surface.attach(a);
        surface.detach(a);
        surface.attach(b);
        assert_eq!(surface.max_attached(), 1);
        assert_eq!(surface.attached(), &[b]);
    }
}
