// SPDX-License-Identifier: MPL-2.0
//! Pointer-to-gesture classification for the banner.
//!
//! A press followed by a release without significant movement is a tap.
//! Movement past [`SLOP`] starts a vertical pan, but only if the pointer is
//! heading upward at that moment; downward or sideways starts are rejected
//! and the rest of that press is ignored.

use iced::Point;
use std::time::Instant;

/// Movement (in logical pixels) below which a press still counts as a tap.
pub const SLOP: f32 = 6.0;

/// Gestures recognized on the banner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    Tap,
    /// A pan started; `delta_y` is the movement since the press.
    PanBegan { delta_y: f32 },
    /// Vertical movement since the previous pan event.
    PanChanged { delta_y: f32 },
    PanEnded,
    /// The pointer was lost mid-pan.
    PanCancelled,
}

/// Pointer velocity in pixels per second.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    /// Velocity between two samples. Samples at the same instant are treated
    /// as one millisecond apart so the direction survives.
    #[must_use]
    pub fn between(from: Point, from_at: Instant, to: Point, to_at: Instant) -> Self {
        let dt = to_at
            .saturating_duration_since(from_at)
            .as_secs_f32()
            .max(0.001);
        Self {
            x: (to.x - from.x) / dt,
            y: (to.y - from.y) / dt,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
enum Phase {
    #[default]
    Idle,
    Pressed {
        origin: Point,
        last: Point,
        last_at: Instant,
    },
    Panning {
        last: Point,
    },
    Rejected,
}

/// Turns raw pointer events into [`Gesture`]s.
#[derive(Debug, Clone, Default)]
pub struct PointerTracker {
    phase: Phase,
}

impl PointerTracker {
    /// Starts tracking a press at `position`.
    pub fn press(&mut self, position: Point, now: Instant) {
        self.phase = Phase::Pressed {
            origin: position,
            last: position,
            last_at: now,
        };
    }

    /// Whether a pan is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self.phase, Phase::Panning { .. })
    }

    /// Whether a press is being tracked (tap candidate or pan).
    #[must_use]
    pub fn is_tracking(&self) -> bool {
        matches!(self.phase, Phase::Pressed { .. } | Phase::Panning { .. })
    }

    /// Feeds a pointer move.
    pub fn moved(&mut self, position: Point, now: Instant) -> Option<Gesture> {
        match self.phase {
            Phase::Idle | Phase::Rejected => None,
            Phase::Pressed {
                origin,
                last,
                last_at,
            } => {
                let dx = position.x - origin.x;
                let dy = position.y - origin.y;
                if dx.abs() < SLOP && dy.abs() < SLOP {
                    self.phase = Phase::Pressed {
                        origin,
                        last: position,
                        last_at: now,
                    };
                    return None;
                }

                let velocity = Velocity::between(last, last_at, position, now);
                if dy.abs() >= dx.abs() && velocity.y < 0.0 {
                    self.phase = Phase::Panning { last: position };
                    Some(Gesture::PanBegan { delta_y: dy })
                } else {
                    self.phase = Phase::Rejected;
                    None
                }
            }
            Phase::Panning { last } => {
                self.phase = Phase::Panning { last: position };
                Some(Gesture::PanChanged {
                    delta_y: position.y - last.y,
                })
            }
        }
    }

    /// Feeds a release. Releases without a tracked press yield nothing.
    pub fn release(&mut self) -> Option<Gesture> {
        let gesture = match self.phase {
            Phase::Pressed { .. } => Some(Gesture::Tap),
            Phase::Panning { .. } => Some(Gesture::PanEnded),
            Phase::Idle | Phase::Rejected => None,
        };
        self.phase = Phase::Idle;
        gesture
    }

    /// Abandons tracking, e.g. when the cursor leaves the window.
    pub fn cancel(&mut self) -> Option<Gesture> {
        let gesture = self.is_panning().then_some(Gesture::PanCancelled);
        self.phase = Phase::Idle;
        gesture
    }
}
