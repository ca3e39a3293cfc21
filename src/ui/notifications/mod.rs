// SPDX-License-Identifier: MPL-2.0
//! In-app notification banners.
//!
//! A banner slides down from the top edge of the window, stays for a few
//! seconds, and slides back up. Tapping it runs the caller's tap action;
//! swiping it upward dismisses it early. Only one banner is ever on screen:
//! showing a new one replaces the current one.
//!
//! # Components
//!
//! - [`content`] - What a banner displays
//! - [`appearance`] - Style constants and layout measurements
//! - [`controller`] - Lifecycle, timers and gestures
//! - [`surface`] - The display collaborator banners attach to
//! - [`gesture`] - Tap and swipe recognition
//! - [`animation`] - Eased slide motion
//!
//! # Usage
//!
//! ```ignore
//! use notification_banner::ui::notifications::{Controller, NotificationContent};
//!
//! let mut banners = Controller::default();
//! let content = NotificationContent::new()
//!     .with_title("Build finished")
//!     .with_message("All 42 tests passed");
//!
//! // The handle can dismiss this banner later.
//! let handle = banners.show(Some(content), Some(Message::Open), None, &mut surface, Instant::now());
//!
//! // In update: feed overlay events back, then forward queued messages.
//! banners.update(event, &mut surface);
//! let tasks = banners.take_messages().into_iter().map(Task::done);
//!
//! // In view: layer the overlay above the window content.
//! stack![content, banners.view().map(Message::Banner)]
//! ```

pub mod animation;
pub mod appearance;
mod banner;
pub mod content;
pub mod controller;
pub mod gesture;
pub mod surface;
mod view;

pub use appearance::{Appearance, GlyphAdvance, TextMeasure};
pub use banner::{BannerId, Phase};
pub use content::NotificationContent;
pub use controller::{BannerHandle, Controller, Event, DISMISS_DRAG_THRESHOLD};
pub use surface::{HeadlessSurface, Surface, SurfaceOp, WindowSurface};
