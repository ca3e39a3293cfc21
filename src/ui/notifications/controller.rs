// SPDX-License-Identifier: MPL-2.0
//! Banner lifecycle management.
//!
//! The [`Controller`] owns at most one active banner plus, briefly, the one
//! sliding out. It drives the entrance, exit and return animations, the
//! auto-dismiss timer, and the tap and swipe gestures.
//!
//! Callbacks are host messages: whatever `M` the caller hands to
//! [`Controller::show`] or [`Controller::dismiss`] is queued when the matching
//! event happens and drained with [`Controller::take_messages`].
//!
//! All lifecycle operations take the current [`Instant`] explicitly so the
//! whole state machine can be driven without a running event loop.

use super::banner::{Banner, BannerId, Motion, Phase};
use super::appearance::Appearance;
use super::content::NotificationContent;
use super::gesture::{Gesture, PointerTracker};
use super::surface::Surface;
use iced::{event, mouse, window, Point, Rectangle, Subscription};
use std::fmt;
use std::time::Instant;

/// A released swipe whose top edge ends above this offset dismisses the banner.
pub const DISMISS_DRAG_THRESHOLD: f32 = -35.0;

/// Refers to a banner returned by [`Controller::show`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BannerHandle(BannerId);

impl BannerHandle {
    #[must_use]
    pub fn id(&self) -> BannerId {
        self.0
    }
}

/// Events produced by the banner overlay and its subscription.
///
/// Hosts wrap these in their own message type and feed them back to
/// [`Controller::update`].
#[derive(Debug, Clone)]
pub enum Event {
    /// A rendered frame; advances animations and timers.
    Frame(Instant),
    CursorMoved(Point),
    /// Left button pressed on the banner.
    Pressed,
    Released,
    CursorLeft,
}

/// Shows and dismisses banners, one at a time.
pub struct Controller<M> {
    appearance: Appearance,
    active: Option<Banner<M>>,
    leaving: Option<Banner<M>>,
    tracker: PointerTracker,
    cursor: Option<Point>,
    /// A press on the banner seen before any cursor position was known.
    pending_press: Option<Instant>,
    outbox: Vec<M>,
}

impl<M> fmt::Debug for Controller<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Controller")
            .field("active", &self.active.as_ref().map(|b| (b.id, b.phase())))
            .field("leaving", &self.leaving.as_ref().map(|b| (b.id, b.phase())))
            .field("queued_messages", &self.outbox.len())
            .finish()
    }
}

impl<M> Default for Controller<M> {
    fn default() -> Self {
        Self::new(Appearance::default())
    }
}

impl<M> Controller<M> {
    #[must_use]
    pub fn new(appearance: Appearance) -> Self {
        Self {
            appearance,
            active: None,
            leaving: None,
            tracker: PointerTracker::default(),
            cursor: None,
            pending_press: None,
            outbox: Vec::new(),
        }
    }

    #[must_use]
    pub fn appearance(&self) -> &Appearance {
        &self.appearance
    }

    /// Replaces the appearance used by banners shown from now on.
    pub fn set_appearance(&mut self, appearance: Appearance) {
        self.appearance = appearance;
    }

    /// Shows `content` in a new banner.
    ///
    /// Returns `None` without doing anything when `content` is `None` or the
    /// surface is unavailable. Any banner already on screen is removed first,
    /// without animation, and its dismissed message is queued.
    pub fn show(
        &mut self,
        content: Option<NotificationContent>,
        on_tap: Option<M>,
        on_dismissed: Option<M>,
        surface: &mut impl Surface,
        now: Instant,
    ) -> Option<BannerHandle> {
        let Some(content) = content else {
            tracing::debug!("show ignored: no content");
            return None;
        };
        let Some(width) = surface.width() else {
            tracing::debug!("show ignored: surface unavailable");
            return None;
        };

        self.finish_leaving(surface);
        if let Some(previous) = self.active.take() {
            tracing::debug!(id = ?previous.id, "replacing active banner");
            self.detach(previous, surface);
        }
        let _ = self.tracker.cancel();
        self.pending_press = None;

        let mut banner = Banner::new(&self.appearance, content, width, on_tap, on_dismissed);
        surface.attach(banner.id);
        surface.elevate();
        banner.set_phase(Phase::Attaching);

        let resting = banner.resting_offset;
        banner.animate_to(Motion::Entrance, resting, now, self.appearance.animation_duration);
        banner.arm_timer(now, self.appearance.appearing_duration);

        let handle = BannerHandle(banner.id);
        tracing::debug!(id = ?banner.id, height = banner.frame.height, "banner shown");
        self.active = Some(banner);
        Some(handle)
    }

    /// Dismisses the banner behind `handle`.
    ///
    /// Always cancels its auto-dismiss timer. With `animated`, the banner
    /// stops being the active one immediately and slides out; once hidden it
    /// is detached, the surface elevation is restored, and its dismissed
    /// message followed by `on_complete` are queued. Without animation all of
    /// that happens now. Banners already sliding out take `on_complete` along
    /// (or finish now, if not animated). Unknown handles are ignored.
    pub fn dismiss(
        &mut self,
        handle: BannerHandle,
        animated: bool,
        on_complete: Option<M>,
        surface: &mut impl Surface,
        now: Instant,
    ) {
        let available = surface.width().is_some();

        if let Some(mut banner) = self.active.take_if(|b| b.id == handle.id()) {
            banner.cancel_timer();
            if !available {
                tracing::debug!(id = ?banner.id, "dismiss ignored: surface unavailable");
                self.active = Some(banner);
                return;
            }
            let _ = self.tracker.cancel();
            self.pending_press = None;
            banner.queue_completion(on_complete);
            if animated {
                self.begin_exit(banner, surface, now);
            } else {
                self.detach(banner, surface);
            }
            return;
        }

        if let Some(mut banner) = self.leaving.take_if(|b| b.id == handle.id()) {
            if !available {
                self.leaving = Some(banner);
                return;
            }
            banner.queue_completion(on_complete);
            if animated {
                self.leaving = Some(banner);
            } else {
                self.detach(banner, surface);
            }
            return;
        }

        tracing::debug!(id = ?handle.id(), "dismiss ignored: banner already detached");
    }

    /// Advances animations to `now` and fires an expired auto-dismiss timer.
    pub fn tick(&mut self, now: Instant, surface: &mut impl Surface) {
        if let Some(banner) = self.leaving.as_mut() {
            if banner.advance(now) == Some(Motion::Exit) {
                self.finish_leaving(surface);
            }
        }

        let mut expired = None;
        if let Some(banner) = self.active.as_mut() {
            match banner.advance(now) {
                Some(Motion::Entrance | Motion::Return) if banner.phase() != Phase::Dragging => {
                    banner.set_phase(Phase::Visible);
                }
                _ => {}
            }
            if banner.take_expired_timer(now) {
                expired = Some(BannerHandle(banner.id));
            }
        }

        if let Some(handle) = expired {
            tracing::debug!(id = ?handle.id(), "auto-dismiss timer fired");
            self.dismiss(handle, true, None, surface, now);
        }
    }

    /// Refits attached banners after the surface width changed.
    ///
    /// Does nothing while the surface is unavailable.
    pub fn relayout(&mut self, surface: &impl Surface) {
        let Some(width) = surface.width() else {
            return;
        };
        let appearance = &self.appearance;
        for banner in self.leaving.iter_mut().chain(self.active.iter_mut()) {
            banner.relayout(appearance, width);
        }
    }

    /// Routes an overlay event, using the wall clock for pointer events.
    pub fn update(&mut self, event: Event, surface: &mut impl Surface) {
        let now = Instant::now();
        match event {
            Event::Frame(now) => self.tick(now, surface),
            Event::CursorMoved(position) => {
                if let Some(pressed_at) = self.pending_press.take() {
                    self.pointer_pressed(position, pressed_at);
                }
                self.pointer_moved(position, now, surface);
            }
            Event::Pressed => match self.cursor {
                Some(position) => self.pointer_pressed(position, now),
                None if self.active.as_ref().is_some_and(Banner::is_interactive) => {
                    // The gesture starts at the next reported position.
                    self.pending_press = Some(now);
                }
                None => {}
            },
            Event::Released => {
                if self.pending_press.take().is_some() {
                    self.tap(now, surface);
                } else {
                    self.pointer_released(now, surface);
                }
            }
            Event::CursorLeft => {
                self.cursor = None;
                self.pending_press = None;
                self.pointer_cancelled(now);
            }
        }
    }

    /// A press landed on the active banner at `position`.
    pub fn pointer_pressed(&mut self, position: Point, now: Instant) {
        self.cursor = Some(position);
        if self.active.as_ref().is_some_and(Banner::is_interactive) {
            self.tracker.press(position, now);
        }
    }

    pub fn pointer_moved(&mut self, position: Point, now: Instant, _surface: &mut impl Surface) {
        self.cursor = Some(position);
        match self.tracker.moved(position, now) {
            Some(Gesture::PanBegan { delta_y }) => {
                self.pan_began();
                self.pan_changed(delta_y);
            }
            Some(Gesture::PanChanged { delta_y }) => self.pan_changed(delta_y),
            _ => {}
        }
    }

    pub fn pointer_released(&mut self, now: Instant, surface: &mut impl Surface) {
        match self.tracker.release() {
            Some(Gesture::Tap) => self.tap(now, surface),
            Some(Gesture::PanEnded) => self.pan_ended(now, surface),
            _ => {}
        }
    }

    /// The pointer was lost (left the window) mid-gesture.
    pub fn pointer_cancelled(&mut self, now: Instant) {
        if self.tracker.cancel() == Some(Gesture::PanCancelled) {
            self.settle(now);
        }
    }

    /// Messages queued since the last call, in delivery order.
    pub fn take_messages(&mut self) -> Vec<M> {
        std::mem::take(&mut self.outbox)
    }

    /// The banner currently accepting interaction, if any.
    #[must_use]
    pub fn active(&self) -> Option<BannerHandle> {
        self.active.as_ref().map(|b| BannerHandle(b.id))
    }

    /// True when no banner is attached.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.active.is_none() && self.leaving.is_none()
    }

    /// Lifecycle phase of an attached banner; `None` once detached.
    #[must_use]
    pub fn phase(&self, handle: BannerHandle) -> Option<Phase> {
        self.find(handle).map(Banner::phase)
    }

    /// Current top offset of an attached banner.
    #[must_use]
    pub fn top_offset(&self, handle: BannerHandle) -> Option<f32> {
        self.find(handle).map(|b| b.top_offset)
    }

    /// Current frame of an attached banner. Its `y` is the hidden offset.
    #[must_use]
    pub fn frame(&self, handle: BannerHandle) -> Option<Rectangle> {
        self.find(handle).map(|b| b.frame)
    }

    /// When the banner's auto-dismiss timer fires, if armed.
    #[must_use]
    pub fn timer_deadline(&self, handle: BannerHandle) -> Option<Instant> {
        self.find(handle).and_then(Banner::timer_deadline)
    }

    /// Pointer events, plus frames while a banner is attached.
    ///
    /// The cursor is followed even when idle so a press on a freshly shown
    /// banner starts from where the pointer really is.
    pub fn subscription(&self) -> Subscription<Event> {
        let pointer = event::listen_with(|event, _status, _window| match event {
            iced::Event::Mouse(mouse::Event::CursorMoved { position }) => {
                Some(Event::CursorMoved(position))
            }
            iced::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                Some(Event::Released)
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) => Some(Event::CursorLeft),
            _ => None,
        });

        if self.is_idle() {
            return pointer;
        }
        Subscription::batch([window::frames().map(Event::Frame), pointer])
    }

    pub(crate) fn attached(&self) -> impl Iterator<Item = &Banner<M>> {
        self.leaving.iter().chain(self.active.iter())
    }

    fn find(&self, handle: BannerHandle) -> Option<&Banner<M>> {
        self.attached().find(|b| b.id == handle.id())
    }

    fn begin_exit(&mut self, mut banner: Banner<M>, surface: &mut impl Surface, now: Instant) {
        self.finish_leaving(surface);
        banner.set_phase(Phase::Dismissing);
        let offscreen = banner.offscreen_offset;
        banner.animate_to(Motion::Exit, offscreen, now, self.appearance.animation_duration);
        tracing::debug!(id = ?banner.id, "banner dismissing");
        self.leaving = Some(banner);
    }

    fn finish_leaving(&mut self, surface: &mut impl Surface) {
        if let Some(banner) = self.leaving.take() {
            self.detach(banner, surface);
        }
    }

    fn detach(&mut self, mut banner: Banner<M>, surface: &mut impl Surface) {
        surface.detach(banner.id);
        surface.restore();
        tracing::debug!(id = ?banner.id, "banner detached");
        self.outbox.extend(banner.finish());
    }

    fn tap(&mut self, now: Instant, surface: &mut impl Surface) {
        let Some(banner) = self.active.as_mut().filter(|b| b.is_interactive()) else {
            return;
        };
        let handle = BannerHandle(banner.id);
        let on_tap = banner.on_tap.take();

        self.dismiss(handle, true, None, surface, now);
        self.outbox.extend(on_tap);
    }

    fn pan_began(&mut self) {
        if let Some(banner) = self.active.as_mut().filter(|b| b.is_interactive()) {
            banner.cancel_timer();
            banner.stop_motion();
            banner.set_phase(Phase::Dragging);
        }
    }

    fn pan_changed(&mut self, delta_y: f32) {
        if let Some(banner) = self
            .active
            .as_mut()
            .filter(|b| b.phase() == Phase::Dragging)
        {
            banner.drag_by(delta_y);
        }
    }

    fn pan_ended(&mut self, now: Instant, surface: &mut impl Surface) {
        let Some(banner) = self
            .active
            .as_ref()
            .filter(|b| b.phase() == Phase::Dragging)
        else {
            return;
        };

        if banner.top_offset < DISMISS_DRAG_THRESHOLD {
            tracing::debug!(id = ?banner.id, offset = banner.top_offset, "swiped away");
            let handle = BannerHandle(banner.id);
            self.dismiss(handle, true, None, surface, now);
        } else {
            self.settle(now);
        }
    }

    /// Re-arms a half-length timer and slides the dragged banner back to rest.
    fn settle(&mut self, now: Instant) {
        let appearing = self.appearance.appearing_duration;
        let returning = self.appearance.return_animation_duration;
        if let Some(banner) = self
            .active
            .as_mut()
            .filter(|b| b.phase() == Phase::Dragging)
        {
            banner.arm_timer(now, appearing / 2);
            let resting = banner.resting_offset;
            banner.animate_to(Motion::Return, resting, now, returning);
            banner.set_phase(Phase::Visible);
        }
    }
}
