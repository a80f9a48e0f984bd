//! Pixel-level stages
//!
//! This module provides the stages that work on whole images:
//! - Color masking against the reference red
//! - 3x3 erosion/dilation and the clean sequence
//! - Row projections and 3-tap smoothing

/// Reference color thresholding
pub mod color_mask;
/// 3x3 erosion and dilation
pub mod morphology;
/// Row counts and smoothing
pub mod projection;
