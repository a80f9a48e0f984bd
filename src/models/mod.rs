/// Boolean pixel grid
pub mod mask;
/// Integer anchor points
pub mod point;
/// Bands, rectangles and the digit layout
pub mod rect;

pub use mask::Mask;
pub use point::PointI;
pub use rect::{Band, DIGIT_COUNT, DigitLayout, Rect};
