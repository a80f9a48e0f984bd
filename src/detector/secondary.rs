/// Remaining-count band detection above the high-score band
use super::band::{BandBounds, BandLocator};
use crate::models::{Band, Mask};
use crate::utils::projection::smoothed_profile;

/// Search for the band one band-height above the high-score band
pub struct SecondaryBandLocator;

impl SecondaryBandLocator {
    /// Row index where the upward search starts: one band height above `primary.top`
    ///
    /// `None` when that lands above the image.
    pub fn search_start(primary: Band) -> Option<usize> {
        let start = 2 * primary.top as isize - primary.bottom as isize - 1;
        usize::try_from(start).ok()
    }

    /// Find the remaining-count band using only columns inside `bounds`
    pub fn locate(mask: &Mask, primary: Band, bounds: BandBounds, min_count: usize) -> Option<Band> {
        let start = Self::search_start(primary)?;
        let profile = smoothed_profile(mask, bounds.left, bounds.right);
        tracing::trace!(
            start,
            left = bounds.left,
            right = bounds.right,
            "narrow row profile ready"
        );
        BandLocator::find_run(&profile, (0..=start).rev(), min_count)
    }
}
