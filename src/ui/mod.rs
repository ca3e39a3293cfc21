// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: state
//! lives in plain structs, views render it, and events flow back as messages.
//!
//! - [`notifications`] - The notification banner widget and its controller
//! - [`geometry`] - Edge insets and rectangle helpers
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod geometry;
pub mod notifications;
