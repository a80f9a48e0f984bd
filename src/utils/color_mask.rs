//! Color segmentation against the reference red
//!
//! Each pixel is compared on its first three channels only, so RGB and RGBA
//! buffers share one code path. Rows are thresholded in parallel.

use crate::models::Mask;
use rayon::prelude::*;

const CHANNEL_MAX_SQ: f64 = 255.0 * 255.0;

/// Squared Euclidean distance between a pixel's first three channels and `reference`
#[inline]
pub fn squared_distance(pixel: &[u8], reference: [u8; 3]) -> i32 {
    let mut sq = 0i32;
    for k in 0..3 {
        let diff = pixel[k] as i32 - reference[k] as i32;
        sq += diff * diff;
    }
    sq
}

/// Whether a pixel lies within `max_normalized_sq` of `reference` (distance² / 255²)
#[inline]
pub fn matches_reference(pixel: &[u8], reference: [u8; 3], max_normalized_sq: f64) -> bool {
    squared_distance(pixel, reference) as f64 / CHANNEL_MAX_SQ <= max_normalized_sq
}

/// Threshold an interleaved buffer into a mask
///
/// `pixels` must hold at least `width * height * channels` bytes and
/// `channels` must be at least 3; the caller validates both.
pub fn color_mask(
    pixels: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    reference: [u8; 3],
    max_normalized_sq: f64,
) -> Mask {
    let mut mask = Mask::new(width, height);
    if width == 0 || height == 0 {
        return mask;
    }
    let row_bytes = width * channels;

    mask.as_mut_slice()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            let src = &pixels[y * row_bytes..(y + 1) * row_bytes];
            for (x, out) in row.iter_mut().enumerate() {
                let idx = x * channels;
                *out = matches_reference(&src[idx..idx + 3], reference, max_normalized_sq);
            }
        });

    mask
}
