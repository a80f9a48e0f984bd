//! Tuned constants for the result-screen layout
//!
//! Every value defaults to the Pikmin 2 challenge result screen. Recalibrating
//! for another capture layout means changing a `LocatorConfig`, not the stages.

/// Result-screen red used for the high-score and remaining-count text
pub const RESULT_RED: [u8; 3] = [222, 13, 9];

fn parse_env_f64(name: &str, default: f64) -> f64 {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<f64>().ok())
        .unwrap_or(default)
}

pub(crate) fn parse_env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_env_rgb(name: &str, default: [u8; 3]) -> [u8; 3] {
    let Ok(value) = std::env::var(name) else {
        return default;
    };
    let parts: Vec<u8> = value
        .split(',')
        .filter_map(|p| p.trim().parse::<u8>().ok())
        .collect();
    match parts.as_slice() {
        [r, g, b] => [*r, *g, *b],
        _ => default,
    }
}

/// Thresholds and ratios used across the pipeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocatorConfig {
    /// Reference color the mask is built around
    pub reference_color: [u8; 3],
    /// Maximum squared color distance, normalized by 255²
    pub max_normalized_sq_distance: f64,
    /// A row belongs to a band when its smoothed count reaches `width / divisor`
    pub min_count_divisor: usize,
    /// Fraction of band rows dropped from each end of the sorted bound samples
    pub bound_trim_fraction: f64,
    /// Band-width to anchor-distance ratio separating the wide layout
    pub wide_aspect_cutoff: f64,
    /// Digit size as a fraction of anchor distance (wide layout)
    pub wide_size_ratio: f64,
    /// Digit size as a fraction of anchor distance (narrow layout)
    pub narrow_size_ratio: f64,
    /// Stride as a multiple of digit size (wide layout)
    pub wide_stride_ratio: f64,
    /// Horizontal start offset in strides from the anchor
    pub start_stride_offset: f64,
    /// Vertical start offset in digit sizes above the anchor
    pub start_row_offset: f64,
}

impl LocatorConfig {
    /// Defaults overridden by `SCORE_*` environment variables
    ///
    /// `SCORE_REFERENCE_COLOR` takes `r,g,b`; the rest take plain numbers.
    pub fn from_env() -> Self {
        let base = Self::default();
        Self {
            reference_color: parse_env_rgb("SCORE_REFERENCE_COLOR", base.reference_color),
            max_normalized_sq_distance: parse_env_f64(
                "SCORE_MAX_COLOR_DISTANCE",
                base.max_normalized_sq_distance,
            ),
            min_count_divisor: parse_env_usize("SCORE_MIN_COUNT_DIVISOR", base.min_count_divisor)
                .max(1),
            bound_trim_fraction: parse_env_f64("SCORE_BOUND_TRIM", base.bound_trim_fraction)
                .clamp(0.0, 0.5),
            wide_aspect_cutoff: parse_env_f64("SCORE_WIDE_CUTOFF", base.wide_aspect_cutoff),
            wide_size_ratio: parse_env_f64("SCORE_WIDE_SIZE_RATIO", base.wide_size_ratio),
            narrow_size_ratio: parse_env_f64("SCORE_NARROW_SIZE_RATIO", base.narrow_size_ratio),
            wide_stride_ratio: parse_env_f64("SCORE_WIDE_STRIDE_RATIO", base.wide_stride_ratio),
            start_stride_offset: parse_env_f64("SCORE_START_STRIDES", base.start_stride_offset),
            start_row_offset: parse_env_f64("SCORE_START_ROWS", base.start_row_offset),
        }
    }

    /// Minimum smoothed row count for an image of the given width
    pub fn min_count(&self, width: usize) -> usize {
        width / self.min_count_divisor.max(1)
    }
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            reference_color: RESULT_RED,
            max_normalized_sq_distance: 0.5 * 0.5,
            min_count_divisor: 30,
            bound_trim_fraction: 0.25,
            // measured ratios fall in 2.42 ~ 2.68
            wide_aspect_cutoff: 2.55,
            wide_size_ratio: 0.5,
            narrow_size_ratio: 0.475,
            wide_stride_ratio: 1.15,
            start_stride_offset: 2.0,
            start_row_offset: 1.65,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_count_uses_integer_division() {
        let config = LocatorConfig::default();
        assert_eq!(config.min_count(300), 10);
        assert_eq!(config.min_count(329), 10);
        assert_eq!(config.min_count(29), 0);
    }

    #[test]
    fn test_from_env_without_overrides_matches_default() {
        // No SCORE_* variables are set in the test environment.
        if std::env::vars().any(|(k, _)| k.starts_with("SCORE_")) {
            return;
        }
        assert_eq!(LocatorConfig::from_env(), LocatorConfig::default());
    }
}
