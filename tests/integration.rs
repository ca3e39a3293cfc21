// SPDX-License-Identifier: MPL-2.0
use notification_banner::config::{self, BackgroundStyle, BannerConfig, Config};
use notification_banner::ui::notifications::{
    Appearance, Controller, HeadlessSurface, NotificationContent, Phase, SurfaceOp,
    DISMISS_DRAG_THRESHOLD,
};
use iced::Point;
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Msg {
    Tapped(&'static str),
    Dismissed(&'static str),
}

fn content(title: &str, message: &str) -> Option<NotificationContent> {
    Some(
        NotificationContent::new()
            .with_source_label("Mail")
            .with_title(title)
            .with_message(message)
            .with_timestamp("now"),
    )
}

fn frame_step() -> Duration {
    Duration::from_millis(16)
}

/// Ticks at frame intervals from `from` until `until`, like a render loop.
fn run_frames(
    controller: &mut Controller<Msg>,
    surface: &mut HeadlessSurface,
    from: Instant,
    until: Instant,
) -> Instant {
    let mut now = from;
    while now < until {
        now += frame_step();
        controller.tick(now, surface);
    }
    now
}

#[test]
fn shown_banner_enters_waits_and_leaves_on_its_own() {
    let mut controller = Controller::new(Appearance::default());
    let mut surface = HeadlessSurface::new(390.0);
    let start = Instant::now();

    let handle = controller
        .show(
            content("A", "B"),
            Some(Msg::Tapped("a")),
            Some(Msg::Dismissed("a")),
            &mut surface,
            start,
        )
        .expect("banner shown");

    let appearance = controller.appearance().clone();
    let t = run_frames(
        &mut controller,
        &mut surface,
        start,
        start + appearance.animation_duration,
    );
    assert_eq!(controller.phase(handle), Some(Phase::Visible));
    assert_eq!(
        controller.top_offset(handle),
        Some(appearance.resting_top_offset())
    );

    let t = run_frames(
        &mut controller,
        &mut surface,
        t,
        start + appearance.appearing_duration + appearance.animation_duration,
    );
    run_frames(&mut controller, &mut surface, t, t + frame_step());

    assert!(controller.is_idle());
    assert!(surface.attached().is_empty());
    assert!(!surface.is_elevated());
    assert_eq!(controller.take_messages(), vec![Msg::Dismissed("a")]);
}

#[test]
fn showing_again_replaces_the_current_banner() {
    let mut controller = Controller::default();
    let mut surface = HeadlessSurface::new(390.0);
    let t = Instant::now();

    let a = controller
        .show(content("A", "first"), None, Some(Msg::Dismissed("a")), &mut surface, t)
        .expect("a");
    let b = controller
        .show(content("B", "second"), None, Some(Msg::Dismissed("b")), &mut surface, t)
        .expect("b");

    assert_eq!(controller.phase(a), None);
    assert_eq!(controller.active(), Some(b));
    assert_eq!(controller.take_messages(), vec![Msg::Dismissed("a")]);
}

#[test]
fn at_most_one_banner_is_ever_attached() {
    let mut controller: Controller<Msg> = Controller::default();
    let mut surface = HeadlessSurface::new(390.0);
    let mut now = Instant::now();

    for round in 0..20u32 {
        let handle = controller
            .show(content("Title", "Body"), None, None, &mut surface, now)
            .expect("shown");
        now += Duration::from_millis(u64::from(round * 37 % 400));
        controller.tick(now, &mut surface);
        if round % 3 == 0 {
            controller.dismiss(handle, round % 2 == 0, None, &mut surface, now);
        }
    }

    assert_eq!(surface.max_attached(), 1);
}

#[test]
fn swipe_up_past_threshold_dismisses_but_short_swipe_returns() {
    let mut controller = Controller::default();
    let mut surface = HeadlessSurface::new(390.0);
    let t = Instant::now();
    let handle = controller
        .show(content("A", "B"), None, Some(Msg::Dismissed("a")), &mut surface, t)
        .expect("shown");
    let t = t + controller.appearance().animation_duration;
    controller.tick(t, &mut surface);
    let resting = controller.appearance().resting_top_offset();

    // Short swipe: the banner settles back and keeps showing.
    controller.pointer_pressed(Point::new(100.0, 40.0), t);
    controller.pointer_moved(Point::new(100.0, 30.0), t + frame_step(), &mut surface);
    controller.pointer_moved(
        Point::new(100.0, 40.0 - (resting + 20.0)),
        t + frame_step() * 2,
        &mut surface,
    );
    let offset = controller.top_offset(handle).expect("attached");
    assert!(offset > DISMISS_DRAG_THRESHOLD);
    controller.pointer_released(t + frame_step() * 3, &mut surface);
    assert_eq!(controller.phase(handle), Some(Phase::Visible));

    let t = t + Duration::from_secs(1);
    controller.tick(t, &mut surface);
    assert_eq!(controller.top_offset(handle), Some(resting));

    // Long swipe: gone.
    controller.pointer_pressed(Point::new(100.0, 40.0), t);
    controller.pointer_moved(Point::new(100.0, 30.0), t + frame_step(), &mut surface);
    controller.pointer_moved(Point::new(100.0, -10.0), t + frame_step() * 2, &mut surface);
    assert!(controller.top_offset(handle).expect("attached") < DISMISS_DRAG_THRESHOLD);
    controller.pointer_released(t + frame_step() * 3, &mut surface);
    assert_eq!(controller.phase(handle), Some(Phase::Dismissing));

    let end = t + Duration::from_secs(1);
    controller.tick(end, &mut surface);
    assert_eq!(controller.take_messages(), vec![Msg::Dismissed("a")]);
}

#[test]
fn double_tap_delivers_tap_once() {
    let mut controller = Controller::default();
    let mut surface = HeadlessSurface::new(390.0);
    let t = Instant::now();
    controller
        .show(
            content("A", "B"),
            Some(Msg::Tapped("a")),
            Some(Msg::Dismissed("a")),
            &mut surface,
            t,
        )
        .expect("shown");

    for _ in 0..2 {
        controller.pointer_pressed(Point::new(60.0, 20.0), t);
        controller.pointer_released(t, &mut surface);
    }
    controller.tick(t + Duration::from_secs(1), &mut surface);

    assert_eq!(
        controller.take_messages(),
        vec![Msg::Tapped("a"), Msg::Dismissed("a")]
    );
}

#[test]
fn surface_operations_pair_up() {
    let mut controller = Controller::default();
    let mut surface = HeadlessSurface::new(390.0);
    let t = Instant::now();
    let handle = controller
        .show(content("A", "B"), Some(Msg::Tapped("a")), None, &mut surface, t)
        .expect("shown");
    controller.dismiss(handle, false, None, &mut surface, t);

    assert_eq!(
        surface.ops(),
        &[
            SurfaceOp::Attach(handle.id()),
            SurfaceOp::Elevate,
            SurfaceOp::Detach(handle.id()),
            SurfaceOp::Restore,
        ]
    );
}

#[test]
fn config_round_trip_drives_appearance() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config = Config {
        banner: BannerConfig {
            appearing_secs: Some(2.0),
            animation_ms: Some(100),
            return_animation_ms: Some(80),
            message_lines: Some(2),
            background: Some(BackgroundStyle::Dark),
        },
    };

    config::save_with_override(&config, Some(dir.path().to_path_buf()))
        .expect("Failed to write config file");
    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    assert_eq!(loaded, config);

    let appearance = Appearance::from_config(&loaded.banner);
    assert_eq!(appearance.appearing_duration, Duration::from_secs(2));
    assert_eq!(appearance.animation_duration, Duration::from_millis(100));
    assert_eq!(appearance.message_line_limit, 2);
    assert_eq!(appearance.background, BackgroundStyle::Dark);
}
