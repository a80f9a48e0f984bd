//! 3x3 binary morphology
//!
//! Neighbors outside the grid read as false, so erosion eats inward from the
//! image border while dilation is unaffected by it.

use crate::models::Mask;
use rayon::prelude::*;

/// The eight unit and diagonal steps around a pixel, as (dy, dx)
pub const NEIGHBORS_8: [(isize, isize); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

fn apply_3x3(mask: &Mask, erode: bool) -> Mask {
    let width = mask.width();
    let mut out = Mask::new(width, mask.height());
    if width == 0 {
        return out;
    }

    out.as_mut_slice()
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            for (x, px) in row.iter_mut().enumerate() {
                let mut value = mask.get(x, y);
                for &(dy, dx) in &NEIGHBORS_8 {
                    let n = mask.get_signed(x as isize + dx, y as isize + dy);
                    if erode {
                        value &= n;
                    } else {
                        value |= n;
                    }
                }
                *px = value;
            }
        });

    out
}

/// True only where the pixel and all eight neighbors are true
pub fn erode3x3(mask: &Mask) -> Mask {
    apply_3x3(mask, true)
}

/// True where the pixel or any of its eight neighbors is true
pub fn dilate3x3(mask: &Mask) -> Mask {
    apply_3x3(mask, false)
}

/// Closing followed by opening: dilate, erode, erode, dilate
///
/// Bridges one-pixel gaps inside strokes first, then drops isolated specks.
pub fn clean(mask: &Mask) -> Mask {
    let closed = erode3x3(&dilate3x3(mask));
    dilate3x3(&erode3x3(&closed))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_erode_border_pixels_become_false() {
        let mut mask = Mask::new(5, 5);
        mask.fill_rect(0, 0, 4, 4, true);
        let eroded = erode3x3(&mask);
        assert!(!eroded.get(0, 0));
        assert!(!eroded.get(4, 2));
        assert!(eroded.get(2, 2));
        assert_eq!(eroded.count_ones(), 9);
    }

    #[test]
    fn test_dilate_grows_single_pixel() {
        let mut mask = Mask::new(5, 5);
        mask.set(0, 0, true);
        let dilated = dilate3x3(&mask);
        assert_eq!(dilated.count_ones(), 4);
        assert!(dilated.get(1, 1));
        assert!(!dilated.get(2, 2));
    }

    #[test]
    fn test_clean_removes_speck() {
        let mut mask = Mask::new(12, 12);
        mask.set(6, 6, true);
        assert_eq!(clean(&mask).count_ones(), 0);
    }

    #[test]
    fn test_clean_keeps_blob() {
        let mut mask = Mask::new(20, 20);
        mask.fill_rect(5, 6, 14, 12, true);
        mask.set(1, 17, true);
        let cleaned = clean(&mask);

        let mut expected = Mask::new(20, 20);
        expected.fill_rect(5, 6, 14, 12, true);
        assert_eq!(cleaned, expected);
    }

    #[test]
    fn test_clean_bridges_one_pixel_gap() {
        let mut mask = Mask::new(20, 12);
        mask.fill_rect(2, 3, 8, 8, true);
        mask.fill_rect(10, 3, 16, 8, true);
        let cleaned = clean(&mask);
        for y in 3..=8 {
            assert!(cleaned.get(9, y), "gap not bridged at row {}", y);
        }
    }
}
