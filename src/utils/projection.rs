//! Row projections and the 3-tap smoothing used for band detection

use crate::models::Mask;
use rayon::prelude::*;

/// Count true pixels per row
pub fn row_counts(mask: &Mask) -> Vec<f32> {
    if mask.width() == 0 {
        return vec![0.0; mask.height()];
    }
    row_counts_in(mask, 0, mask.width() - 1)
}

/// Count true pixels per row within the inclusive column range `[left, right]`
///
/// An empty range (`left > right`) counts nothing; `right` is clipped to the mask.
pub fn row_counts_in(mask: &Mask, left: usize, right: usize) -> Vec<f32> {
    let width = mask.width();
    (0..mask.height())
        .into_par_iter()
        .map(|y| {
            if width == 0 || left > right || left >= width {
                return 0.0;
            }
            let end = right.min(width - 1);
            mask.row(y)[left..=end].iter().filter(|&&v| v).count() as f32
        })
        .collect()
}

/// 3-tap moving average
///
/// Both edge elements sum two values yet are still divided by three, which
/// attenuates the first and last rows slightly. Band thresholds were tuned with
/// this behavior.
pub fn smooth3(v: &[f32]) -> Vec<f32> {
    let n = v.len();
    match n {
        0 => Vec::new(),
        1 => vec![v[0] / 3.0],
        _ => {
            let mut out = vec![0.0f32; n];
            out[0] = (v[0] + v[1]) / 3.0;
            for (slot, w) in out[1..n - 1].iter_mut().zip(v.windows(3)) {
                *slot = (w[0] + w[1] + w[2]) / 3.0;
            }
            out[n - 1] = (v[n - 2] + v[n - 1]) / 3.0;
            out
        }
    }
}

/// Smoothed row profile over `[left, right]`
pub fn smoothed_profile(mask: &Mask, left: usize, right: usize) -> Vec<f32> {
    smooth3(&row_counts_in(mask, left, right))
}
