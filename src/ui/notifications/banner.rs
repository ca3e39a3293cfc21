// SPDX-License-Identifier: MPL-2.0
//! A single banner and its lifecycle state.

use super::animation::Tween;
use super::appearance::{Appearance, ComposedMessage};
use super::content::NotificationContent;
use iced::Rectangle;
use std::time::{Duration, Instant};

/// Unique identifier for a banner instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BannerId(u64);

impl BannerId {
    /// Creates a new unique banner ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for BannerId {
    fn default() -> Self {
        Self::new()
    }
}

/// Lifecycle of one banner. `Detached` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Created,
    /// On the surface and sliding in.
    Attaching,
    Visible,
    Dragging,
    /// Sliding out.
    Dismissing,
    Detached,
}

/// What the running tween is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Motion {
    Entrance,
    Exit,
    Return,
}

pub(crate) struct Banner<M> {
    pub(crate) id: BannerId,
    pub(crate) content: NotificationContent,
    pub(crate) composed: ComposedMessage,
    pub(crate) frame: Rectangle,
    pub(crate) top_offset: f32,
    pub(crate) resting_offset: f32,
    pub(crate) offscreen_offset: f32,
    phase: Phase,
    motion: Option<(Motion, Tween)>,
    dismiss_deadline: Option<Instant>,
    pub(crate) on_tap: Option<M>,
    on_dismissed: Option<M>,
    completions: Vec<M>,
}

impl<M> Banner<M> {
    pub(crate) fn new(
        appearance: &Appearance,
        content: NotificationContent,
        surface_width: f32,
        on_tap: Option<M>,
        on_dismissed: Option<M>,
    ) -> Self {
        let frame = appearance.initial_frame(&content, surface_width);
        let composed = appearance.composed_message_text(content.title(), content.message());
        Self {
            id: BannerId::new(),
            content,
            composed,
            frame,
            top_offset: frame.y,
            resting_offset: appearance.resting_top_offset(),
            offscreen_offset: frame.y,
            phase: Phase::Created,
            motion: None,
            dismiss_deadline: None,
            on_tap,
            on_dismissed,
            completions: Vec::new(),
        }
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        debug_assert!(
            self.phase != Phase::Detached,
            "detached banners never change phase"
        );
        self.phase = phase;
    }

    /// Whether the banner still accepts taps and drags.
    pub(crate) fn is_interactive(&self) -> bool {
        matches!(
            self.phase,
            Phase::Attaching | Phase::Visible | Phase::Dragging
        )
    }

    /// Arms the auto-dismiss timer, replacing any pending one.
    pub(crate) fn arm_timer(&mut self, now: Instant, delay: Duration) {
        self.dismiss_deadline = Some(now + delay);
    }

    pub(crate) fn cancel_timer(&mut self) {
        self.dismiss_deadline = None;
    }

    pub(crate) fn timer_deadline(&self) -> Option<Instant> {
        self.dismiss_deadline
    }

    /// Fires the timer if due; at most once per arming.
    pub(crate) fn take_expired_timer(&mut self, now: Instant) -> bool {
        match self.dismiss_deadline {
            Some(deadline) if now >= deadline => {
                self.dismiss_deadline = None;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn animate_to(&mut self, motion: Motion, target: f32, now: Instant, duration: Duration) {
        self.motion = Some((motion, Tween::new(self.top_offset, target, now, duration)));
    }

    /// Freezes the banner where it is.
    pub(crate) fn stop_motion(&mut self) {
        self.motion = None;
    }

    #[cfg(test)]
    pub(crate) fn motion(&self) -> Option<Motion> {
        self.motion.map(|(motion, _)| motion)
    }

    /// Advances the running tween, returning its kind once it has finished.
    pub(crate) fn advance(&mut self, now: Instant) -> Option<Motion> {
        let (motion, tween) = self.motion?;
        self.top_offset = tween.value_at(now);
        if tween.is_finished(now) {
            self.motion = None;
            Some(motion)
        } else {
            None
        }
    }

    /// Refits the frame to a surface `surface_width` wide.
    ///
    /// The height follows the new wrap width, so the hidden offset moves too;
    /// an exit in flight is redirected to it.
    pub(crate) fn relayout(&mut self, appearance: &Appearance, surface_width: f32) {
        self.frame = appearance.initial_frame(&self.content, surface_width);
        self.offscreen_offset = self.frame.y;
        self.top_offset = self.top_offset.max(self.offscreen_offset);
        if let Some((Motion::Exit, tween)) = self.motion.as_mut() {
            *tween = tween.with_target(self.offscreen_offset);
        }
    }

    /// Moves by `delta_y`, never below rest and never past fully hidden.
    pub(crate) fn drag_by(&mut self, delta_y: f32) {
        self.top_offset = (self.top_offset + delta_y)
            .min(self.resting_offset)
            .max(self.offscreen_offset);
    }

    pub(crate) fn queue_completion(&mut self, message: Option<M>) {
        self.completions.extend(message);
    }

    /// Marks the banner detached and hands back its pending deliveries:
    /// the dismissed message first, then queued completions.
    pub(crate) fn finish(&mut self) -> Vec<M> {
        self.phase = Phase::Detached;
        self.motion = None;
        self.dismiss_deadline = None;
        self.on_tap = None;
        let mut delivered: Vec<M> = self.on_dismissed.take().into_iter().collect();
        delivered.append(&mut self.completions);
        delivered
    }
}
