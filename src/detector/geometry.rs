/// Digit layout model: two band anchors to five evenly spaced squares
use super::band::BandBounds;
use crate::config::LocatorConfig;
use crate::error::LocateError;
use crate::models::{Band, DIGIT_COUNT, DigitLayout, PointI, Rect};

/// Intermediate quantities of the layout model
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DigitGeometry {
    /// Center of the high-score band
    pub primary_anchor: PointI,
    /// Center of the remaining-count band, sharing the primary column
    pub secondary_anchor: PointI,
    /// Vertical anchor distance in pixels
    pub length: i32,
    /// Whether the band is wide relative to `length`
    pub is_wide: bool,
    /// Side length of each digit square
    pub digit_size: i32,
    /// Horizontal distance between digit origins, kept fractional
    pub digit_stride: f32,
    /// Top-left corner of the first digit
    pub start: PointI,
}

impl DigitGeometry {
    /// Derive the layout from both bands
    pub fn estimate(
        primary: Band,
        bounds: BandBounds,
        secondary: Band,
        config: &LocatorConfig,
    ) -> Result<Self, LocateError> {
        let left = bounds.left as i32;
        let right = bounds.right as i32;
        let primary_anchor = PointI::new((left + right) / 2, primary.center() as i32);
        let secondary_anchor = PointI::new(primary_anchor.x, secondary.center() as i32);

        let length = primary_anchor.y - secondary_anchor.y;
        if length <= 0 {
            return Err(LocateError::DegenerateGeometry {
                length,
                digit_size: 0,
            });
        }

        // single-precision ratio: 153 / 60 lands just under 2.55
        let aspect = (right - left) as f32 / length as f32;
        let is_wide = aspect as f64 >= config.wide_aspect_cutoff;
        let size_ratio = if is_wide {
            config.wide_size_ratio
        } else {
            config.narrow_size_ratio
        };
        let digit_size = (size_ratio * length as f64) as i32;
        if digit_size <= 0 {
            return Err(LocateError::DegenerateGeometry { length, digit_size });
        }

        let digit_stride = if is_wide {
            (config.wide_stride_ratio * digit_size as f64) as f32
        } else {
            digit_size as f32
        };
        let offset = PointI::new(
            (config.start_stride_offset * digit_stride as f64 + digit_size as f64 / 2.0) as i32,
            (config.start_row_offset * digit_size as f64) as i32,
        );

        Ok(Self {
            primary_anchor,
            secondary_anchor,
            length,
            is_wide,
            digit_size,
            digit_stride,
            start: secondary_anchor - offset,
        })
    }

    /// Column offset of digit `i` from `start`
    pub fn column_offset(&self, i: usize) -> i32 {
        (i as f32 * self.digit_stride) as i32
    }

    /// The five digit rectangles
    pub fn layout(&self) -> DigitLayout {
        let mut rects = [Rect::default(); DIGIT_COUNT];
        for (i, rect) in rects.iter_mut().enumerate() {
            let origin = self.start + PointI::new(self.column_offset(i), 0);
            let end = origin + PointI::new(self.digit_size, self.digit_size);
            let size = end - origin;
            *rect = Rect::new(origin.y, origin.x, size.y, size.x);
        }
        DigitLayout::new(rects)
    }
}
