use crate::config::LocatorConfig;
use crate::detector::band::{BandBounds, BandLocator};
use crate::detector::geometry::DigitGeometry;
use crate::detector::secondary::SecondaryBandLocator;
use crate::error::{BandKind, LocateError};
use crate::models::{Band, DigitLayout, Mask};
use crate::utils::color_mask::color_mask;
use crate::utils::morphology::clean;

/// Everything the pipeline derived on the way to a layout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocateTrace {
    /// Mask pixels left after morphology
    pub mask_pixels: usize,
    /// Row threshold applied to both band searches
    pub min_count: usize,
    /// High-score band rows
    pub primary: Band,
    /// High-score band columns
    pub bounds: BandBounds,
    /// Remaining-count band rows
    pub secondary: Band,
    /// Layout model parameters
    pub geometry: DigitGeometry,
}

impl LocateTrace {
    /// The five digit rectangles
    pub fn layout(&self) -> DigitLayout {
        self.geometry.layout()
    }
}

pub(crate) fn validate_input(
    pixels: &[u8],
    width: usize,
    height: usize,
    channels: usize,
) -> Result<(), LocateError> {
    if width == 0 || height == 0 || channels < 3 {
        return Err(LocateError::EmptyImage {
            width,
            height,
            channels,
        });
    }
    let required = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channels))
        .unwrap_or(usize::MAX);
    if pixels.len() < required {
        return Err(LocateError::InsufficientData {
            data_len: pixels.len(),
            required,
        });
    }
    Ok(())
}

/// Threshold and clean the reference-color mask
pub(crate) fn build_mask(
    pixels: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    config: &LocatorConfig,
) -> Mask {
    let raw = color_mask(
        pixels,
        width,
        height,
        channels,
        config.reference_color,
        config.max_normalized_sq_distance,
    );
    let mask = clean(&raw);
    tracing::debug!(
        raw = raw.count_ones(),
        cleaned = mask.count_ones(),
        "reference color mask built"
    );
    mask
}

/// Run band detection and the layout model on a cleaned mask
pub(crate) fn locate_in_mask(mask: &Mask, config: &LocatorConfig) -> Result<LocateTrace, LocateError> {
    let min_count = config.min_count(mask.width());

    let primary =
        BandLocator::locate(mask, min_count).ok_or(LocateError::BandNotFound(BandKind::Primary))?;
    let bounds = BandLocator::estimate_bounds(mask, primary, config.bound_trim_fraction);
    tracing::debug!(
        top = primary.top,
        bottom = primary.bottom,
        left = bounds.left,
        right = bounds.right,
        "high-score band"
    );

    let secondary = SecondaryBandLocator::locate(mask, primary, bounds, min_count)
        .ok_or(LocateError::BandNotFound(BandKind::Secondary))?;
    tracing::debug!(
        top = secondary.top,
        bottom = secondary.bottom,
        "remaining-count band"
    );

    let geometry = DigitGeometry::estimate(primary, bounds, secondary, config)?;
    tracing::debug!(
        length = geometry.length,
        is_wide = geometry.is_wide,
        digit_size = geometry.digit_size,
        stride = geometry.digit_stride,
        "digit layout"
    );

    Ok(LocateTrace {
        mask_pixels: mask.count_ones(),
        min_count,
        primary,
        bounds,
        secondary,
        geometry,
    })
}

/// Full pipeline: validation, mask, bands, layout
pub(crate) fn run(
    pixels: &[u8],
    width: usize,
    height: usize,
    channels: usize,
    config: &LocatorConfig,
) -> Result<LocateTrace, LocateError> {
    validate_input(pixels, width, height, channels)?;
    let mask = build_mask(pixels, width, height, channels, config);
    locate_in_mask(&mask, config)
}
