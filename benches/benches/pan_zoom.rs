// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Rect, Size, Vec2};
use understory_pan_zoom::{
    ContentExtent, FlingSimulator, GestureConfig, GestureController, GestureEvent, Viewport,
};

fn controller() -> GestureController {
    let mut c = GestureController::new(GestureConfig::default());
    c.set_viewport(Viewport::new(Size::new(1080.0, 2340.0)).unwrap());
    c.set_content(Some(ContentExtent::new(Size::new(4000.0, 3000.0)).unwrap()));
    c
}

fn bench_fling_curve(c: &mut Criterion) {
    let mut group = c.benchmark_group("fling/position_at");

    for frames in [60usize, 240, 1_000] {
        let mut fling = FlingSimulator::default();
        fling.fling(
            Point::new(-1200.0, -800.0),
            Vec2::new(-7000.0, 2500.0),
            Rect::new(-2900.0, -1500.0, 0.0, 0.0),
        );
        group.bench_with_input(BenchmarkId::from_parameter(frames), &fling, |b, fling| {
            b.iter(|| {
                let mut acc = Vec2::ZERO;
                for i in 0..=frames {
                    acc += fling.position_at(i as f64 / frames as f64).to_vec2();
                }
                black_box(acc);
            });
        });
    }

    group.finish();
}

fn bench_pinch_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller/pinch");

    for steps in [16usize, 128] {
        group.bench_with_input(BenchmarkId::from_parameter(steps), &steps, |b, &steps| {
            b.iter_batched(
                controller,
                |mut view| {
                    view.handle(GestureEvent::ScaleBegin);
                    for i in 0..steps {
                        let t = i as f64 / steps as f64;
                        view.handle(GestureEvent::Scale {
                            focus: Point::new(400.0 + 200.0 * t, 1100.0 - 150.0 * t),
                            factor: 1.0 + 0.05 * (t - 0.3),
                        });
                    }
                    view.handle(GestureEvent::ScaleEnd);
                    while view.tick(1.0) {}
                    black_box(view.state());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

fn bench_double_tap_cycle(c: &mut Criterion) {
    c.bench_function("controller/double_tap_cycle", |b| {
        b.iter_batched(
            controller,
            |mut view| {
                for _ in 0..3 {
                    view.handle(GestureEvent::DoubleTap {
                        focus: Point::new(540.0, 1170.0),
                    });
                    for frame in 1..=12 {
                        view.tick(f64::from(frame) / 12.0);
                    }
                }
                black_box(view.state());
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_fling_curve,
    bench_pinch_sequence,
    bench_double_tap_cycle
);
criterion_main!(benches);
