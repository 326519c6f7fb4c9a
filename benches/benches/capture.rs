// Copyright 2025 the Zoomable Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use zoomable::{MediaSource, ZoomEngine};
use zoomable_capture::{RgbaImage, capture_visible_region, crop};

fn bench_crop_and_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("capture/visible_region");
    for side in [256u32, 1_024] {
        let raster = RgbaImage::new(side, side, vec![128; (side * side * 4) as usize])
            .expect("raster size matches");
        let mut engine = ZoomEngine::default();
        engine.on_viewport_resize(Size::new(800.0, 600.0), false);
        engine.on_media_ready(MediaSource::image(f64::from(side), f64::from(side)));
        engine.zoom_at_point(10.0, Point::new(400.0, 300.0));

        let region = engine.visible_source_region().expect("media is ready");
        group.throughput(Throughput::Bytes(u64::from(side * side * 4)));

        group.bench_with_input(BenchmarkId::new("crop", side), &raster, |b, raster| {
            b.iter(|| black_box(crop(raster, region.rect)));
        });
        group.bench_with_input(BenchmarkId::new("png", side), &raster, |b, raster| {
            b.iter(|| black_box(capture_visible_region(&engine, raster)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_crop_and_encode);
criterion_main!(benches);
