/// High-score band detection by bottom-up row-run scanning
use crate::models::{Band, Mask};
use crate::utils::projection::{row_counts, smooth3};

/// Horizontal extent of a band, inclusive column indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BandBounds {
    /// Left column
    pub left: usize,
    /// Right column
    pub right: usize,
}

/// Row-run search over smoothed mask profiles
pub struct BandLocator;

impl BandLocator {
    /// Find the qualifying run nearest the bottom of the image
    pub fn locate(mask: &Mask, min_count: usize) -> Option<Band> {
        let profile = smooth3(&row_counts(mask));
        tracing::trace!(rows = profile.len(), min_count, "row profile ready");
        Self::find_run(&profile, (0..profile.len()).rev(), min_count)
    }

    /// Walk `rows` in order and return the first contiguous run of rows whose
    /// smoothed count reaches `min_count`
    ///
    /// Rows are expected in decreasing index order: the first qualifying row
    /// becomes `bottom`, every following qualifying row moves `top`, and the
    /// first failing row after that ends the scan.
    pub fn find_run(
        profile: &[f32],
        rows: impl Iterator<Item = usize>,
        min_count: usize,
    ) -> Option<Band> {
        let threshold = min_count as f32;
        let mut run: Option<(usize, usize)> = None;

        for y in rows {
            let Some(&count) = profile.get(y) else {
                continue;
            };
            if count >= threshold {
                run = Some(match run {
                    None => (y, y),
                    Some((_, bottom)) => (y, bottom),
                });
            } else if run.is_some() {
                break;
            }
        }

        run.map(|(top, bottom)| Band::new(top, bottom))
    }

    /// Trimmed left/right extent of the mask inside `band`
    ///
    /// Each row contributes the column scanned just before its first true pixel
    /// from the left, and likewise from the right. After sorting, the outer
    /// `trim_fraction` of rows is skipped on each side so rows with stray or
    /// missing pixels do not move the bounds.
    pub fn estimate_bounds(mask: &Mask, band: Band, trim_fraction: f64) -> BandBounds {
        let mut firsts: Vec<usize> = (band.top..=band.bottom)
            .map(|y| scan_left(mask.row(y)))
            .collect();
        let mut lasts: Vec<usize> = (band.top..=band.bottom)
            .map(|y| scan_right(mask.row(y)))
            .collect();
        firsts.sort_unstable();
        lasts.sort_unstable();

        let span = band.bottom - band.top;
        let gap = trim_gap(span, trim_fraction);
        BandBounds {
            left: firsts[gap],
            right: lasts[span - gap],
        }
    }
}

/// Number of sorted samples skipped on each side for a band spanning `span` rows
pub(crate) fn trim_gap(span: usize, trim_fraction: f64) -> usize {
    let gap = (span as f64 * trim_fraction.clamp(0.0, 0.5)) as usize;
    gap.min(span / 2)
}

/// Last column visited before the first true pixel, scanning left to right
///
/// Zero when column 0 is already set; `len - 1` for an empty row.
fn scan_left(row: &[bool]) -> usize {
    let mut last = 0;
    for (x, &value) in row.iter().enumerate() {
        if value {
            break;
        }
        last = x;
    }
    last
}

/// Mirror of [`scan_left`] from the right edge
///
/// Zero when the last column is already set, not `len - 1`.
fn scan_right(row: &[bool]) -> usize {
    let mut last = 0;
    for (x, &value) in row.iter().enumerate().rev() {
        if value {
            break;
        }
        last = x;
    }
    last
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_run_nearest_bottom() {
        let profile = Vec::from([0.0, 20.0, 20.0, 0.0, 15.0, 15.0, 15.0, 0.0]);
        let band = BandLocator::find_run(&profile, (0..8).rev(), 10).unwrap();
        assert_eq!(band, Band::new(4, 6));
    }

    #[test]
    fn test_find_run_threshold_is_inclusive() {
        let profile = Vec::from([10.0, 9.9, 10.0]);
        let band = BandLocator::find_run(&profile, (0..3).rev(), 10).unwrap();
        assert_eq!(band, Band::new(2, 2));
    }

    #[test]
    fn test_find_run_reaches_top_row() {
        let profile = Vec::from([12.0, 12.0, 0.0]);
        let band = BandLocator::find_run(&profile, (0..3).rev(), 10).unwrap();
        assert_eq!(band, Band::new(0, 1));
    }

    #[test]
    fn test_find_run_none_when_nothing_qualifies() {
        let profile = Vec::from([1.0, 2.0, 3.0]);
        assert!(BandLocator::find_run(&profile, (0..3).rev(), 10).is_none());
    }

    #[test]
    fn test_locate_on_mask() {
        let mut mask = Mask::new(60, 40);
        mask.fill_rect(10, 20, 49, 25, true);
        // min_count = 60 / 30 = 2; smoothing spreads the run one row each way
        let band = BandLocator::locate(&mask, 2).unwrap();
        assert_eq!(band, Band::new(19, 26));
    }

    #[test]
    fn test_scan_semantics() {
        assert_eq!(scan_left(&[false, false, true, false]), 1);
        assert_eq!(scan_left(&[true, false, false]), 0);
        assert_eq!(scan_left(&[false, false, false]), 2);
        assert_eq!(scan_right(&[false, true, false, false]), 2);
        assert_eq!(scan_right(&[false, false, true]), 0);
        assert_eq!(scan_right(&[false, false, false]), 0);
    }

    #[test]
    fn test_bounds_ignore_outlier_row() {
        // 9 rows: span 8, gap 2
        let mut mask = Mask::new(40, 9);
        mask.fill_rect(10, 0, 29, 8, true);
        // one row with a stray pixel far left and far right
        mask.set(1, 4, true);
        mask.set(38, 4, true);
        let bounds = BandLocator::estimate_bounds(&mask, Band::new(0, 8), 0.25);
        assert_eq!(bounds, BandBounds { left: 9, right: 30 });
    }

    #[test]
    fn test_bounds_ignore_missing_row() {
        let mut mask = Mask::new(40, 5);
        mask.fill_rect(10, 0, 29, 4, true);
        mask.fill_rect(0, 2, 39, 2, false);
        // span 4, gap 1: the empty row samples 39 on the left and 0 on the right
        let bounds = BandLocator::estimate_bounds(&mask, Band::new(0, 4), 0.25);
        assert_eq!(bounds, BandBounds { left: 9, right: 30 });
    }

    #[test]
    fn test_trim_gap() {
        assert_eq!(trim_gap(22, 0.25), 5);
        assert_eq!(trim_gap(3, 0.25), 0);
        assert_eq!(trim_gap(4, 0.25), 1);
        assert_eq!(trim_gap(4, 0.9), 2);
    }
}
