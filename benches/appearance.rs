// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for banner layout measurement.
//!
//! Every `show` measures the content once; these keep that cheap.

use criterion::{criterion_group, criterion_main, Criterion};
use notification_banner::ui::notifications::{Appearance, NotificationContent};
use std::hint::black_box;

fn short_content() -> NotificationContent {
    NotificationContent::new()
        .with_source_label("Mail")
        .with_title("New message")
        .with_message("Lunch at noon?")
}

fn long_content() -> NotificationContent {
    let message = "The quick brown fox jumps over the lazy dog. ".repeat(40);
    NotificationContent::new()
        .with_source_label("Mail")
        .with_title("A rather long subject line for a message")
        .with_message(message)
}

fn bench_required_height(c: &mut Criterion) {
    let appearance = Appearance::default();
    let short = short_content();
    let long = long_content();

    let mut group = c.benchmark_group("required_height");
    group.bench_function("short", |b| {
        b.iter(|| appearance.required_height(black_box(&short), black_box(378.0)));
    });
    group.bench_function("long", |b| {
        b.iter(|| appearance.required_height(black_box(&long), black_box(378.0)));
    });
    group.finish();
}

fn bench_initial_frame(c: &mut Criterion) {
    let appearance = Appearance::default();
    let content = short_content();

    c.bench_function("initial_frame", |b| {
        b.iter(|| appearance.initial_frame(black_box(&content), black_box(1024.0)));
    });
}

criterion_group!(benches, bench_required_height, bench_initial_frame);
criterion_main!(benches);
