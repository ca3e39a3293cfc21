// SPDX-License-Identifier: MPL-2.0
//! Demo application hosting the notification banner.
//!
//! The `App` struct owns the banner controller and the window-backed surface
//! it attaches to, and forwards the messages the controller delivers back
//! into its own update loop.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message, Sample};

use crate::config;
use crate::ui::notifications::{Appearance, Controller, WindowSurface};
use iced::{window, Element, Subscription, Task};
use std::fmt;

/// Root iced application state.
pub struct App {
    banners: Controller<Message>,
    surface: WindowSurface,
    /// Banners shown so far; numbers the samples.
    shown: u32,
    /// Recently delivered callbacks, oldest first.
    log: Vec<String>,
    /// Problem reading the config file, shown in the window.
    config_warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("banners", &self.banners)
            .field("shown", &self.shown)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 640.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 480.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 240.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced requires a `Fn` boot closure; flags are cloned per call
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        if let Some(background) = flags.background {
            config.banner.background = Some(background);
        }

        let app = App {
            banners: Controller::new(Appearance::from_config(&config.banner)),
            surface: WindowSurface::new(),
            shown: 0,
            log: Vec::new(),
            config_warning,
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        "Notification Banner".to_owned()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_window_subscription(),
            subscription::create_banner_subscription(&self.banners),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            banners: &mut self.banners,
            surface: &mut self.surface,
            shown: &mut self.shown,
            log: &mut self.log,
        };
        update::update(&mut ctx, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            banners: &self.banners,
            log: &self.log,
            warning: self.config_warning.as_deref(),
        })
    }
}
