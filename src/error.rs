/// Which of the two text bands a search was looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BandKind {
    /// The high-score band nearest the bottom of the screen
    Primary,
    /// The remaining-count band above the high-score band
    Secondary,
}

impl std::fmt::Display for BandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Primary => write!(f, "high-score"),
            Self::Secondary => write!(f, "remaining-count"),
        }
    }
}

/// Reasons a screenshot yields no digit layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LocateError {
    /// Zero width/height or fewer than three channels.
    EmptyImage {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
        /// Bytes per pixel
        channels: usize,
    },
    /// The pixel buffer is shorter than `width * height * channels`.
    InsufficientData {
        /// Bytes supplied
        data_len: usize,
        /// Bytes needed
        required: usize,
    },
    /// No run of rows met the count threshold.
    BandNotFound(BandKind),
    /// The two anchors are not vertically separated, or the digits collapse to nothing.
    DegenerateGeometry {
        /// Vertical anchor distance
        length: i32,
        /// Digit size derived from it
        digit_size: i32,
    },
}

impl std::fmt::Display for LocateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyImage {
                width,
                height,
                channels,
            } => write!(
                f,
                "empty image: {}x{} with {} channels",
                width, height, channels
            ),
            Self::InsufficientData { data_len, required } => {
                write!(f, "pixel buffer too short: {} < {}", data_len, required)
            }
            Self::BandNotFound(kind) => write!(f, "{} band not found", kind),
            Self::DegenerateGeometry { length, digit_size } => write!(
                f,
                "degenerate geometry: anchor distance {}, digit size {}",
                length, digit_size
            ),
        }
    }
}

impl std::error::Error for LocateError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_names_band() {
        let err = LocateError::BandNotFound(BandKind::Secondary);
        assert_eq!(err.to_string(), "remaining-count band not found");
    }
}
