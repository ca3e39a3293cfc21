// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Timing**: Auto-dismiss delay and animation durations
//! - **Layout**: Message line cap

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Default time a banner stays on screen before dismissing itself (seconds).
pub const DEFAULT_APPEARING_SECS: f32 = 5.0;

/// Minimum auto-dismiss delay (seconds).
pub const MIN_APPEARING_SECS: f32 = 1.0;

/// Maximum auto-dismiss delay (seconds).
pub const MAX_APPEARING_SECS: f32 = 60.0;

/// Default duration of the entrance and exit slides (milliseconds).
pub const DEFAULT_ANIMATION_MS: u32 = 350;

/// Default duration of the slide back to rest after an aborted swipe (milliseconds).
pub const DEFAULT_RETURN_ANIMATION_MS: u32 = 200;

/// Minimum animation duration (milliseconds).
pub const MIN_ANIMATION_MS: u32 = 50;

/// Maximum animation duration (milliseconds).
pub const MAX_ANIMATION_MS: u32 = 2_000;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Default maximum number of lines shown for the message body.
pub const DEFAULT_MESSAGE_LINES: u32 = 4;

/// Minimum message line cap.
pub const MIN_MESSAGE_LINES: u32 = 1;

/// Maximum message line cap.
pub const MAX_MESSAGE_LINES: u32 = 10;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_APPEARING_SECS >= MIN_APPEARING_SECS);
    assert!(DEFAULT_APPEARING_SECS <= MAX_APPEARING_SECS);
    assert!(DEFAULT_ANIMATION_MS >= MIN_ANIMATION_MS);
    assert!(DEFAULT_ANIMATION_MS <= MAX_ANIMATION_MS);
    assert!(DEFAULT_RETURN_ANIMATION_MS >= MIN_ANIMATION_MS);
    assert!(DEFAULT_RETURN_ANIMATION_MS <= DEFAULT_ANIMATION_MS);
    assert!(DEFAULT_MESSAGE_LINES >= MIN_MESSAGE_LINES);
    assert!(DEFAULT_MESSAGE_LINES <= MAX_MESSAGE_LINES);
};
