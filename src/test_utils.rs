// SPDX-License-Identifier: MPL-2.0
//! Test helpers for float comparisons.
//!
//! Re-exports the `approx` crate's assertion macros, which handle the rounding
//! that `assert_eq!` cannot.

pub use approx::assert_abs_diff_eq;

/// Tolerance for layout values (pixels) built from sums and products of f32 constants.
pub const LAYOUT_EPSILON: f32 = 1e-3;
