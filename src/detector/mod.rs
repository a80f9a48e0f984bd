//! Band detection and layout modules
//!
//! - High-score band search and trimmed bound estimation
//! - Remaining-count band search above it
//! - Digit layout model built from both band centers

/// High-score band search and bound estimation
pub mod band;
/// Digit size, stride and rectangle layout
pub mod geometry;
/// Remaining-count band search inside the high-score columns
pub mod secondary;
