/// Contiguous run of rows, inclusive on both ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    /// First row of the run
    pub top: usize,
    /// Last row of the run
    pub bottom: usize,
}

impl Band {
    /// Create a band; `top` must not exceed `bottom`
    pub fn new(top: usize, bottom: usize) -> Self {
        debug_assert!(top <= bottom);
        Self { top, bottom }
    }

    /// Number of rows in the band
    pub fn height(&self) -> usize {
        self.bottom - self.top + 1
    }

    /// Middle row, rounded down
    pub fn center(&self) -> usize {
        (self.top + self.bottom) / 2
    }
}

/// Axis-aligned rectangle in pixel units
///
/// Coordinates are signed: the layout model may place rectangles partly
/// outside the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    /// Top row
    pub row: i32,
    /// Left column
    pub col: i32,
    /// Height in pixels
    pub height: i32,
    /// Width in pixels
    pub width: i32,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(row: i32, col: i32, height: i32, width: i32) -> Self {
        Self {
            row,
            col,
            height,
            width,
        }
    }

    /// `[row, col, height, width]`
    pub fn to_array(&self) -> [i32; 4] {
        [self.row, self.col, self.height, self.width]
    }

    /// Intersect with a `width` x `height` image; `None` when nothing is left
    pub fn clip(&self, width: usize, height: usize) -> Option<(usize, usize, usize, usize)> {
        let x0 = self.col.max(0) as i64;
        let y0 = self.row.max(0) as i64;
        let x1 = (self.col as i64 + self.width as i64).min(width as i64);
        let y1 = (self.row as i64 + self.height as i64).min(height as i64);
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some((x0 as usize, y0 as usize, (x1 - x0) as usize, (y1 - y0) as usize))
    }
}

/// Number of score digits on the result screen
pub const DIGIT_COUNT: usize = 5;

/// Five digit rectangles of equal size, left to right
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitLayout {
    rects: [Rect; DIGIT_COUNT],
}

impl DigitLayout {
    pub(crate) fn new(rects: [Rect; DIGIT_COUNT]) -> Self {
        Self { rects }
    }

    /// The rectangles, leftmost first
    pub fn rects(&self) -> &[Rect; DIGIT_COUNT] {
        &self.rects
    }

    /// Shared digit size in pixels
    pub fn digit_size(&self) -> i32 {
        self.rects[0].height
    }

    /// Flattened `[row, col, height, width]` per rectangle
    pub fn to_flat(&self) -> [i32; DIGIT_COUNT * 4] {
        let mut out = [0i32; DIGIT_COUNT * 4];
        for (i, rect) in self.rects.iter().enumerate() {
            out[i * 4..i * 4 + 4].copy_from_slice(&rect.to_array());
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_band_center_and_height() {
        let band = Band::new(99, 121);
        assert_eq!(band.height(), 23);
        assert_eq!(band.center(), 110);
        assert_eq!(Band::new(39, 60).center(), 49);
    }

    #[test]
    fn test_rect_clip() {
        let rect = Rect::new(-5, 10, 20, 20);
        assert_eq!(rect.clip(100, 100), Some((10, 0, 20, 15)));
        assert_eq!(rect.clip(5, 100), None);
        assert_eq!(Rect::new(90, 90, 20, 20).clip(100, 100), Some((90, 90, 10, 10)));
    }

    #[test]
    fn test_layout_flat_order() {
        let rects = [
            Rect::new(1, 66, 30, 30),
            Rect::new(1, 100, 30, 30),
            Rect::new(1, 135, 30, 30),
            Rect::new(1, 169, 30, 30),
            Rect::new(1, 204, 30, 30),
        ];
        let layout = DigitLayout::new(rects);
        let flat = layout.to_flat();
        assert_eq!(&flat[..4], &[1, 66, 30, 30]);
        assert_eq!(&flat[16..], &[1, 204, 30, 30]);
        assert_eq!(layout.digit_size(), 30);
    }
}
