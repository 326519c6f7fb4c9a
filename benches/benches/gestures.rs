// Copyright 2025 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size};
use zoomable::{InputEvent, MediaSource, PointerId, ZoomEngine};

fn viewer() -> ZoomEngine {
    let mut engine = ZoomEngine::default();
    engine.on_viewport_resize(Size::new(1280.0, 720.0), false);
    engine.on_media_ready(MediaSource::image(4000.0, 3000.0));
    engine.set_zoom_percentage(50.0);
    engine
}

/// Points on a circle around the viewport centre, so drags and pinches keep
/// changing direction.
fn path(len: usize) -> Vec<Point> {
    (0..len)
        .map(|i| {
            let t = i as f64 * 0.05;
            Point::new(640.0 + 300.0 * t.cos(), 360.0 + 200.0 * t.sin())
        })
        .collect()
}

fn bench_single_pointer_pan(c: &mut Criterion) {
    let mut group = c.benchmark_group("gestures/pan");
    for len in [64usize, 512, 4_096] {
        let points = path(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &points, |b, points| {
            b.iter_batched(
                || {
                    let mut engine = viewer();
                    engine.begin_drag(PointerId(1), points[0]);
                    engine
                },
                |mut engine| {
                    for &p in points {
                        engine.update_pointer(PointerId(1), p);
                    }
                    black_box(engine.snapshot());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_two_pointer_pinch(c: &mut Criterion) {
    let mut group = c.benchmark_group("gestures/pinch");
    for len in [64usize, 512, 4_096] {
        let points = path(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &points, |b, points| {
            b.iter_batched(
                || {
                    let mut engine = viewer();
                    engine.begin_drag(PointerId(1), Point::new(640.0, 360.0));
                    engine.begin_drag(PointerId(2), points[0]);
                    engine
                },
                |mut engine| {
                    for &p in points {
                        engine.update_pointer(PointerId(2), p);
                    }
                    black_box(engine.snapshot());
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

fn bench_event_dispatch(c: &mut Criterion) {
    let points = path(1_024);
    let mut events = Vec::with_capacity(points.len() * 2);
    for (i, &p) in points.iter().enumerate() {
        let delta_y = if i % 3 == 0 { -0.4 } else { 0.4 };
        events.push(InputEvent::Wheel {
            delta_y,
            position: p,
        });
        events.push(InputEvent::DocumentPointerMove { position: p });
    }

    let mut group = c.benchmark_group("gestures/dispatch");
    group.throughput(Throughput::Elements(events.len() as u64));
    group.bench_function("wheel_and_document_moves", |b| {
        b.iter_batched(
            viewer,
            |mut engine| {
                for &event in &events {
                    black_box(engine.handle(event));
                }
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_single_pointer_pan,
    bench_two_pointer_pinch,
    bench_event_dispatch
);
criterion_main!(benches);
