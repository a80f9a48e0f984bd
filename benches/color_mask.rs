use criterion::{Criterion, black_box, criterion_group, criterion_main};
use score_locator::config::RESULT_RED;
use score_locator::utils::color_mask::color_mask;
use score_locator::utils::projection::{row_counts, smooth3};

mod common;

fn bench_color_mask_medium(c: &mut Criterion) {
    let image = common::synthetic_result_screen(640, 480);
    c.bench_function("color_mask_640x480_rgb", |b| {
        b.iter(|| color_mask(black_box(&image), 640, 480, 3, RESULT_RED, 0.25))
    });
}

fn bench_color_mask_large(c: &mut Criterion) {
    let image = common::synthetic_result_screen(1920, 1080);
    c.bench_function("color_mask_1920x1080_rgb", |b| {
        b.iter(|| color_mask(black_box(&image), 1920, 1080, 3, RESULT_RED, 0.25))
    });
}

fn bench_row_profile_large(c: &mut Criterion) {
    let image = common::synthetic_result_screen(1920, 1080);
    let mask = color_mask(&image, 1920, 1080, 3, RESULT_RED, 0.25);
    c.bench_function("row_profile_1920x1080", |b| {
        b.iter(|| smooth3(&row_counts(black_box(&mask))))
    });
}

criterion_group!(
    benches,
    bench_color_mask_medium,
    bench_color_mask_large,
    bench_row_profile_large
);
criterion_main!(benches);
