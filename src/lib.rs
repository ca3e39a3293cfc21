// SPDX-License-Identifier: MPL-2.0
//! `notification_banner` is an in-app notification banner for iced
//! applications, modelled on the alerts desktop and mobile systems show.
//!
//! A banner slides in from the top of the window, dismisses itself after a
//! few seconds, and reacts to taps and upward swipes. See
//! [`ui::notifications`] for the widget and [`config`] for user settings.

#![doc(html_root_url = "https://docs.rs/notification_banner/0.1.0")]

pub mod app;
pub mod config;
pub mod error;
pub mod ui;

#[cfg(test)]
mod test_utils;
