pub mod dataset;

pub use dataset::{Dataset, DatasetEntry, bench_limit_from_env, dataset_root_from_env};

use crate::models::{DigitLayout, Mask};
use crate::pipeline::LocateTrace;
use image::imageops::{self, FilterType};
use image::{Rgb, RgbImage};
use std::path::Path;

const MASK_COLOR: Rgb<u8> = Rgb([0, 255, 0]);
const ANCHOR_COLOR: Rgb<u8> = Rgb([0, 0, 255]);
const RECT_COLOR: Rgb<u8> = Rgb([255, 0, 0]);

/// Side length of digit patches handed to a recognizer.
pub const PATCH_SIZE: u32 = 64;

/// Load an image as RGB bytes along with its dimensions.
pub fn load_rgb<P: AsRef<Path>>(path: P) -> Result<(Vec<u8>, usize, usize), image::ImageError> {
    let rgb = image::io::Reader::open(path)?
        .with_guessed_format()?
        .decode()?
        .to_rgb8();
    let (width, height) = rgb.dimensions();
    Ok((rgb.into_raw(), width as usize, height as usize))
}

/// Wrap RGB bytes back into an image buffer.
pub fn to_image(rgb: &[u8], width: usize, height: usize) -> Option<RgbImage> {
    RgbImage::from_raw(width as u32, height as u32, rgb.to_vec())
}

/// Summary statistics for a mask.
#[derive(Debug, Clone, Copy)]
pub struct MaskStats {
    /// Count of mask pixels.
    pub set_pixels: usize,
    /// Total pixels in the mask.
    pub total_pixels: usize,
    /// Ratio of mask pixels to total pixels.
    pub set_ratio: f64,
    /// Rows containing at least one mask pixel.
    pub rows_touched: usize,
}

/// Compute coverage stats for a mask.
pub fn mask_stats(mask: &Mask) -> MaskStats {
    let set = mask.count_ones();
    let rows_touched = (0..mask.height())
        .filter(|&y| mask.row(y).iter().any(|&v| v))
        .count();
    let total = mask.width() * mask.height();
    let ratio = if total == 0 {
        0.0
    } else {
        set as f64 / total as f64
    };
    MaskStats {
        set_pixels: set,
        total_pixels: total,
        set_ratio: ratio,
        rows_touched,
    }
}

/// Paint mask pixels green over the source image.
pub fn render_mask_overlay(base: &RgbImage, mask: &Mask) -> RgbImage {
    let mut out = base.clone();
    for (x, y, px) in out.enumerate_pixels_mut() {
        if mask.get(x as usize, y as usize) {
            *px = MASK_COLOR;
        }
    }
    out
}

fn fill_clipped(img: &mut RgbImage, x0: i64, y0: i64, x1: i64, y1: i64, color: Rgb<u8>) {
    let (w, h) = (img.width() as i64, img.height() as i64);
    for y in y0.max(0)..y1.min(h) {
        for x in x0.max(0)..x1.min(w) {
            img.put_pixel(x as u32, y as u32, color);
        }
    }
}

/// Outline thickness scaled to the image size.
pub fn stroke_width(width: u32, height: u32) -> i64 {
    ((((width as f64) * (height as f64)).sqrt() / 2000.0) as i64).max(1)
}

/// Draw the layout over the source image.
///
/// Each row gets a green bar as long as its mask count, the anchor distance
/// is drawn upward from the remaining-count anchor in blue and each digit
/// rectangle is outlined in red.
pub fn render_layout_overlay(base: &RgbImage, mask: &Mask, trace: &LocateTrace) -> RgbImage {
    let mut out = base.clone();

    for y in 0..mask.height().min(out.height() as usize) {
        let count = mask.row(y).iter().filter(|&&v| v).count();
        fill_clipped(&mut out, 0, y as i64, count as i64, y as i64 + 1, MASK_COLOR);
    }

    let anchor = trace.geometry.secondary_anchor;
    let (ax, ay) = (anchor.x as i64, anchor.y as i64);
    fill_clipped(
        &mut out,
        ax - 1,
        ay - trace.geometry.length as i64,
        ax + 1,
        ay + 1,
        ANCHOR_COLOR,
    );

    let t = stroke_width(out.width(), out.height());
    draw_layout(&mut out, &trace.layout(), t);
    out
}

/// Outline every digit rectangle in place.
pub fn draw_layout(img: &mut RgbImage, layout: &DigitLayout, thickness: i64) {
    for rect in layout.rects() {
        let (x0, y0) = (rect.col as i64, rect.row as i64);
        let (x1, y1) = (x0 + rect.width as i64, y0 + rect.height as i64);
        fill_clipped(img, x0, y0, x1 + 1, y0 + thickness, RECT_COLOR);
        fill_clipped(img, x0, y1 + 1 - thickness, x1 + 1, y1 + 1, RECT_COLOR);
        fill_clipped(img, x0, y0, x0 + thickness, y1 + 1, RECT_COLOR);
        fill_clipped(img, x1 + 1 - thickness, y0, x1 + 1, y1 + 1, RECT_COLOR);
    }
}

/// Crop each digit and scale it to a `size` x `size` patch.
///
/// Rectangles are clipped to the image first; a digit with nothing left
/// yields `None`. Small crops are pixel-replicated up to at least `size`
/// before the final resize so thin strokes survive the filter.
pub fn crop_digit_patches(img: &RgbImage, layout: &DigitLayout, size: u32) -> Vec<Option<RgbImage>> {
    layout
        .rects()
        .iter()
        .map(|rect| {
            let (x, y, w, h) = rect.clip(img.width() as usize, img.height() as usize)?;
            let crop = imageops::crop_imm(img, x as u32, y as u32, w as u32, h as u32).to_image();
            let times = size.div_ceil(crop.width().min(crop.height()).max(1)).max(1);
            let magnified = if times > 1 {
                imageops::resize(
                    &crop,
                    crop.width() * times,
                    crop.height() * times,
                    FilterType::Nearest,
                )
            } else {
                crop
            };
            Some(imageops::resize(&magnified, size, size, FilterType::Triangle))
        })
        .collect()
}

/// Flatten a patch into a planar `[3, h, w]` tensor scaled to `[0, 1]`.
///
/// The red plane comes first, then green, then blue.
pub fn patch_to_tensor(patch: &RgbImage) -> Vec<f32> {
    let plane = (patch.width() * patch.height()) as usize;
    let mut out = vec![0.0f32; plane * 3];
    for (i, px) in patch.pixels().enumerate() {
        for (c, &v) in px.0.iter().enumerate() {
            out[c * plane + i] = v as f32 / 255.0;
        }
    }
    out
}

/// Ground truth encoded in a labeled screenshot name: `<stage>-<player>-<score>.<ext>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenshotLabel {
    /// 1-based challenge stage number.
    pub stage_id: u32,
    /// Player name.
    pub player: String,
    /// Score shown on the result screen.
    pub score: u32,
}

impl ScreenshotLabel {
    /// Score right-aligned into five digit slots, blanks as `None`.
    pub fn digits(&self) -> [Option<u8>; 5] {
        let text = format!("{:>5}", self.score);
        let tail = &text[text.len() - 5..];
        let mut out = [None; 5];
        for (slot, ch) in out.iter_mut().zip(tail.chars()) {
            *slot = ch.to_digit(10).map(|d| d as u8);
        }
        out
    }
}

/// Parse a labeled screenshot file name.
///
/// Returns `None` unless the stem splits into exactly three `-` separated
/// tokens with numeric stage and score.
pub fn parse_label<P: AsRef<Path>>(path: P) -> Option<ScreenshotLabel> {
    let stem = path.as_ref().file_stem()?.to_str()?;
    let tokens: Vec<&str> = stem.split('-').collect();
    let [stage, player, score] = tokens.as_slice() else {
        return None;
    };
    Some(ScreenshotLabel {
        stage_id: stage.parse().ok()?,
        player: (*player).to_string(),
        score: score.parse().ok()?,
    })
}
