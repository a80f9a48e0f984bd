/// Boolean pixel grid produced by color thresholding
///
/// Stored one byte per pixel, row-major, so rows can be handed out as
/// contiguous slices for parallel passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: usize,
    height: usize,
    data: Vec<bool>,
}

impl Mask {
    /// Create an all-false mask with given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            data: vec![false; width * height],
        }
    }

    /// Build a mask from row-major data (`data.len()` must equal `width * height`)
    pub fn from_vec(width: usize, height: usize, data: Vec<bool>) -> Option<Self> {
        if data.len() != width * height {
            return None;
        }
        Some(Self {
            width,
            height,
            data,
        })
    }

    /// Get mask width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get mask height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get value at (x, y); out of bounds reads as false
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.data[y * self.width + x]
    }

    /// Signed lookup used for neighbor sampling; anything outside the grid is false
    pub fn get_signed(&self, x: isize, y: isize) -> bool {
        if x < 0 || y < 0 {
            return false;
        }
        self.get(x as usize, y as usize)
    }

    /// Set value at (x, y); out of bounds writes are ignored
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        self.data[y * self.width + x] = value;
    }

    /// Borrow one row
    pub fn row(&self, y: usize) -> &[bool] {
        let start = y * self.width;
        &self.data[start..start + self.width]
    }

    /// Fill an inclusive rectangle `[x0, x1] x [y0, y1]`, clipped to the grid
    pub fn fill_rect(&mut self, x0: usize, y0: usize, x1: usize, y1: usize, value: bool) {
        for y in y0..=y1.min(self.height.saturating_sub(1)) {
            for x in x0..=x1.min(self.width.saturating_sub(1)) {
                self.set(x, y, value);
            }
        }
    }

    /// Number of true pixels
    pub fn count_ones(&self) -> usize {
        self.data.iter().filter(|&&v| v).count()
    }

    /// Raw row-major values
    pub fn as_slice(&self) -> &[bool] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [bool] {
        &mut self.data
    }
}

impl Default for Mask {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_get_set() {
        let mut mask = Mask::new(8, 4);
        assert_eq!(mask.width(), 8);
        assert_eq!(mask.height(), 4);

        mask.set(3, 2, true);
        assert!(mask.get(3, 2));
        assert!(!mask.get(2, 3));
        assert_eq!(mask.count_ones(), 1);
        assert!(mask.row(2)[3]);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut mask = Mask::new(8, 8);
        mask.fill_rect(0, 0, 7, 7, true);
        mask.set(10, 10, true); // Should not panic
        assert!(!mask.get(10, 10));
        assert!(!mask.get_signed(-1, 0));
        assert!(!mask.get_signed(0, -1));
        assert!(!mask.get_signed(8, 0));
        assert!(mask.get_signed(7, 7));
    }

    #[test]
    fn test_from_vec_rejects_wrong_length() {
        assert!(Mask::from_vec(3, 3, vec![false; 8]).is_none());
        assert!(Mask::from_vec(3, 3, vec![false; 9]).is_some());
    }
}
