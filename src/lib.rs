//! score_locator - score digit locator for Pikmin 2 challenge result screens
//!
//! Finds the five score digit rectangles on a result screenshot using color
//! thresholding, 3x3 morphology and row projections. The output is geometry
//! only; reading the digits is left to a downstream recognizer.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Tuned constants and environment overrides
pub mod config;
/// Band detection and digit layout
pub mod detector;
/// Error types
pub mod error;
/// Core data structures (Mask, Band, Rect, DigitLayout, PointI)
pub mod models;
/// Pipeline wiring and stage trace
pub mod pipeline;
/// Image loading, overlays, digit patches and dataset helpers
pub mod tools;
/// Pixel-level stages (color mask, morphology, projections)
pub mod utils;

pub use config::LocatorConfig;
pub use error::{BandKind, LocateError};
pub use models::{Band, DigitLayout, Mask, PointI, Rect};
pub use pipeline::LocateTrace;

/// Locate the five score digits in an interleaved image buffer
///
/// # Arguments
/// * `image` - Raw pixel bytes, row-major, red first (RGB or RGBA)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `channels` - Bytes per pixel, at least 3
///
/// # Returns
/// Five equal-size rectangles ordered left to right, or the reason none could
/// be placed
///
/// # Example
/// ```
/// let image = vec![0u8; 64 * 48 * 3];
/// let result = score_locator::locate_digits(&image, 64, 48, 3);
/// assert!(matches!(result, Err(score_locator::LocateError::BandNotFound(_))));
/// ```
pub fn locate_digits(
    image: &[u8],
    width: usize,
    height: usize,
    channels: usize,
) -> Result<DigitLayout, LocateError> {
    Locator::new().locate(image, width, height, channels)
}

/// Digit locator carrying its layout configuration
#[derive(Debug, Clone, Default)]
pub struct Locator {
    config: LocatorConfig,
}

impl Locator {
    /// Create a locator with the default result-screen constants
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a locator with explicit constants
    pub fn with_config(config: LocatorConfig) -> Self {
        Self { config }
    }

    /// Create a locator from `SCORE_*` environment overrides
    pub fn from_env() -> Self {
        Self::with_config(LocatorConfig::from_env())
    }

    /// Active configuration
    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// Locate the digit rectangles
    pub fn locate(
        &self,
        image: &[u8],
        width: usize,
        height: usize,
        channels: usize,
    ) -> Result<DigitLayout, LocateError> {
        self.locate_with_trace(image, width, height, channels)
            .map(|trace| trace.layout())
    }

    /// Locate the digit rectangles and keep every intermediate quantity
    pub fn locate_with_trace(
        &self,
        image: &[u8],
        width: usize,
        height: usize,
        channels: usize,
    ) -> Result<LocateTrace, LocateError> {
        pipeline::run(image, width, height, channels, &self.config)
    }

    /// Cleaned reference-color mask, as the band search sees it
    pub fn mask(
        &self,
        image: &[u8],
        width: usize,
        height: usize,
        channels: usize,
    ) -> Result<Mask, LocateError> {
        pipeline::validate_input(image, width, height, channels)?;
        Ok(pipeline::build_mask(
            image,
            width,
            height,
            channels,
            &self.config,
        ))
    }

    /// Run band detection and layout on an already cleaned mask
    pub fn locate_in_mask(&self, mask: &Mask) -> Result<LocateTrace, LocateError> {
        pipeline::locate_in_mask(mask, &self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(width: usize, height: usize, channels: usize, blocks: &[(usize, usize, usize, usize)]) -> Vec<u8> {
        let mut image = vec![0u8; width * height * channels];
        for &(x0, y0, x1, y1) in blocks {
            for y in y0..=y1 {
                for x in x0..=x1 {
                    let idx = (y * width + x) * channels;
                    image[idx..idx + 3].copy_from_slice(&config::RESULT_RED);
                }
            }
        }
        image
    }

    #[test]
    fn test_locate_empty() {
        let image = vec![0u8; 300]; // 10x10 RGB
        assert_eq!(
            locate_digits(&image, 10, 10, 3),
            Err(LocateError::BandNotFound(BandKind::Primary))
        );
    }

    #[test]
    fn test_locate_rejects_bad_dimensions() {
        assert!(matches!(
            locate_digits(&[], 0, 0, 3),
            Err(LocateError::EmptyImage { .. })
        ));
    }

    #[test]
    fn test_locate_rgba_matches_rgb() {
        let blocks = [(50, 100, 250, 120), (50, 40, 250, 60)];
        let rgb = render(300, 200, 3, &blocks);
        let rgba = render(300, 200, 4, &blocks);
        let a = locate_digits(&rgb, 300, 200, 3).unwrap();
        let b = locate_digits(&rgba, 300, 200, 4).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_trace_matches_layout() {
        let blocks = [(50, 100, 250, 120), (50, 40, 250, 60)];
        let image = render(300, 200, 3, &blocks);
        let locator = Locator::new();
        let trace = locator.locate_with_trace(&image, 300, 200, 3).unwrap();
        assert_eq!(trace.primary, Band::new(99, 121));
        assert_eq!(trace.secondary, Band::new(39, 61));
        assert_eq!(trace.min_count, 10);
        assert_eq!(trace.layout(), locator.locate(&image, 300, 200, 3).unwrap());

        let mask = locator.mask(&image, 300, 200, 3).unwrap();
        assert_eq!(locator.locate_in_mask(&mask).unwrap(), trace);
    }
}
