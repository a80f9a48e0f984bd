use criterion::{Criterion, black_box, criterion_group, criterion_main};
use score_locator::Mask;
use score_locator::utils::morphology::{clean, dilate3x3, erode3x3};

fn striped_mask(width: usize, height: usize) -> Mask {
    let mut mask = Mask::new(width, height);
    for y in (0..height).step_by(16) {
        mask.fill_rect(width / 8, y, width * 7 / 8, y + 7, true);
    }
    mask
}

fn bench_erode_medium(c: &mut Criterion) {
    let mask = striped_mask(640, 480);
    c.bench_function("erode3x3_640x480", |b| b.iter(|| erode3x3(black_box(&mask))));
}

fn bench_dilate_medium(c: &mut Criterion) {
    let mask = striped_mask(640, 480);
    c.bench_function("dilate3x3_640x480", |b| b.iter(|| dilate3x3(black_box(&mask))));
}

fn bench_clean_large(c: &mut Criterion) {
    let mask = striped_mask(1920, 1080);
    c.bench_function("clean_1920x1080", |b| b.iter(|| clean(black_box(&mask))));
}

criterion_group!(
    benches,
    bench_erode_medium,
    bench_dilate_medium,
    bench_clean_large
);
criterion_main!(benches);
