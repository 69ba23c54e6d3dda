// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for hero carousel operations.
//!
//! Measures the performance of:
//! - A full crossfade (start, reveal, settle) against the iced scene
//! - Input translation for rejected requests during a transition

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use hero_carousel::carousel::{CarouselTiming, Input, SlideshowController};
use hero_carousel::ui::hero::HeroScene;
use std::hint::black_box;
use std::time::Instant;

fn controller(slides: usize, now: Instant) -> SlideshowController<HeroScene> {
    let timing = CarouselTiming::default();
    let scene = HeroScene::new(slides, timing.fade_duration(), now);
    let mut controller = SlideshowController::new(scene, timing).unwrap();
    controller.start(now);
    controller
}

/// Benchmark one complete transition, deadlines included.
fn bench_full_transition(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_navigation");

    for slides in [3usize, 12, 48] {
        group.bench_with_input(
            BenchmarkId::new("full_transition", slides),
            &slides,
            |b, &slides| {
                let mut now = Instant::now();
                let mut carousel = controller(slides, now);
                let fade = carousel.timing().fade_duration();
                b.iter(|| {
                    carousel.view_mut().set_clock(now);
                    carousel.advance_next(now);
                    now += fade;
                    carousel.view_mut().set_clock(now);
                    carousel.tick(now);
                    black_box(carousel.current_slide());
                });
            },
        );
    }

    group.finish();
}

/// Benchmark inputs dropped while a crossfade is running.
fn bench_busy_inputs(c: &mut Criterion) {
    let mut group = c.benchmark_group("carousel_navigation");

    let now = Instant::now();
    let mut carousel = controller(12, now);
    carousel.advance_next(now);

    group.bench_function("busy_inputs", |b| {
        b.iter(|| {
            black_box(carousel.handle_input(Input::NextPressed, now));
            black_box(carousel.handle_input(Input::IndicatorPressed(5), now));
        });
    });

    group.finish();
}

criterion_group!(benches, bench_full_transition, bench_busy_inputs);
criterion_main!(benches);
