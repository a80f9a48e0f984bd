#![allow(dead_code)]

use score_locator::config::RESULT_RED;
use score_locator::tools::Dataset;
use std::path::PathBuf;

/// Labeled screenshots under `SCORE_DATASET_ROOT`, capped by `SCORE_BENCH_LIMIT`
pub fn collect_dataset_images() -> (PathBuf, Vec<PathBuf>) {
    let dataset = Dataset::from_env().labeled_only(true);
    let images = dataset.entries().into_iter().map(|e| e.path).collect();
    (dataset.root().to_path_buf(), images)
}

/// Gray RGB frame with a high-score band and a remaining-count band scaled to the frame
pub fn synthetic_result_screen(width: usize, height: usize) -> Vec<u8> {
    let mut image = vec![96u8; width * height * 3];
    let (x0, x1) = (width / 6, width * 5 / 6);
    let band_h = height / 10;
    let primary_top = height / 2;
    let secondary_top = primary_top - 3 * band_h;
    for top in [primary_top, secondary_top] {
        for y in top..top + band_h {
            for x in x0..x1 {
                let idx = (y * width + x) * 3;
                image[idx..idx + 3].copy_from_slice(&RESULT_RED);
            }
        }
    }
    image
}
