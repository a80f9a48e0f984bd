use std::ops::{Add, Sub};

/// Integer point for pixel anchors and offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointI {
    /// X coordinate (column)
    pub x: i32,
    /// Y coordinate (row)
    pub y: i32,
}

impl PointI {
    /// Create a new integer point
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for PointI {
    type Output = PointI;

    fn add(self, rhs: PointI) -> PointI {
        PointI::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for PointI {
    type Output = PointI;

    fn sub(self, rhs: PointI) -> PointI {
        PointI::new(self.x - rhs.x, self.y - rhs.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_arithmetic() {
        let a = PointI::new(150, 50);
        let b = PointI::new(84, 49);
        assert_eq!(a - b, PointI::new(66, 1));
        assert_eq!(a - b + b, a);
    }
}
