//! Benchmarks for the touchup transforms.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use image::{Rgba, RgbaImage};

use touchup::codec::encode_to_vec;
use touchup::transform::{chroma_key, composite, detect_content_bbox, pad_canvas, scale_overlay};
use touchup::{Colour, PixelFormat, Raster, SaveOptions};

/// White canvas with a darker block in the middle, like a scanned logo.
fn logo_on_white(size: u32) -> Raster {
    let lo = size / 4;
    let hi = size - lo;
    let img = RgbaImage::from_fn(size, size, |x, y| {
        if (lo..hi).contains(&x) && (lo..hi).contains(&y) {
            Rgba([(x % 200) as u8, (y % 200) as u8, 80, 255])
        } else {
            Rgba([252, 252, 252, 255])
        }
    });
    Raster::new(img, PixelFormat::Rgba).unwrap()
}

fn bench_pixel_scans(c: &mut Criterion) {
    let mut group = c.benchmark_group("scans");
    let img = logo_on_white(512);

    group.bench_function("detect_content_bbox_512", |b| {
        b.iter(|| detect_content_bbox(black_box(&img), 240, 5))
    });

    group.bench_function("chroma_key_512", |b| {
        b.iter(|| chroma_key(black_box(&img), 240).unwrap())
    });

    group.finish();
}

fn bench_compositing(c: &mut Criterion) {
    let mut group = c.benchmark_group("compositing");
    let base = Raster::filled(1024, 1229, Colour::new(40, 90, 160, 255)).unwrap();
    let logo = chroma_key(&logo_on_white(400), 240).unwrap();

    group.bench_function("scale_overlay_lanczos", |b| {
        b.iter(|| scale_overlay(black_box(&base), black_box(&logo), 0.2).unwrap())
    });

    let scaled = scale_overlay(&base, &logo, 0.2).unwrap();
    group.bench_function("composite_logo", |b| {
        b.iter(|| composite(black_box(&base), black_box(&scaled), 452, 712).unwrap())
    });

    group.bench_function("pad_canvas_headroom", |b| {
        b.iter(|| pad_canvas(black_box(&base), 1024, 1536, 0, 307, Colour::TRANSPARENT).unwrap())
    });

    group.finish();
}

fn bench_encoding(c: &mut Criterion) {
    let mut group = c.benchmark_group("encoding");
    let img = logo_on_white(256);

    group.bench_function("encode_png_256", |b| {
        b.iter(|| encode_to_vec(black_box(&img), image::ImageFormat::Png, &SaveOptions::default()).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_pixel_scans, bench_compositing, bench_encoding);
criterion_main!(benches);
