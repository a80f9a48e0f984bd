use clap::{Parser, Subcommand};
use score_locator::tools::{
    Dataset, PATCH_SIZE, bench_limit_from_env, crop_digit_patches, dataset_root_from_env, load_rgb,
    mask_stats, render_layout_overlay, render_mask_overlay, to_image,
};
use score_locator::{LocateError, Locator};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

type CliError = Box<dyn std::error::Error>;
type CliResult<T> = Result<T, CliError>;

#[derive(Parser)]
#[command(name = "scoretool", version, about = "Score digit locator tools")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Locate the five digit rectangles in a single screenshot
    Locate {
        #[arg(long)]
        image: PathBuf,
        /// Print the 20 integers in boundary order instead of one line per digit
        #[arg(long)]
        flat: bool,
    },
    /// Print the stage trace and write mask/layout overlays
    Debug {
        #[arg(long)]
        image: PathBuf,
        #[arg(long)]
        out_dir: PathBuf,
    },
    /// Write one square patch per digit
    Crop {
        #[arg(long)]
        image: PathBuf,
        #[arg(long)]
        out_dir: PathBuf,
        #[arg(long, default_value_t = PATCH_SIZE)]
        size: u32,
    },
    /// Run the locator over a directory of screenshots
    Batch {
        #[arg(long)]
        root: Option<PathBuf>,
        #[arg(long)]
        limit: Option<usize>,
        /// Only screenshots named `<stage>-<player>-<score>`
        #[arg(long)]
        labeled: bool,
    },
}

fn main() -> CliResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let locator = Locator::from_env();

    match cli.command {
        Command::Locate { image, flat } => locate_cmd(&locator, &image, flat),
        Command::Debug { image, out_dir } => debug_cmd(&locator, &image, &out_dir),
        Command::Crop {
            image,
            out_dir,
            size,
        } => crop_cmd(&locator, &image, &out_dir, size),
        Command::Batch {
            root,
            limit,
            labeled,
        } => batch_cmd(&locator, root, limit, labeled),
    }
}

fn locate_cmd(locator: &Locator, image: &Path, flat: bool) -> CliResult<()> {
    let (pixels, width, height) = load_rgb(image)?;
    let layout = locator.locate(&pixels, width, height, 3)?;

    if flat {
        let values: Vec<String> = layout.to_flat().iter().map(|v| v.to_string()).collect();
        println!("{}", values.join(" "));
        return Ok(());
    }

    println!("Image: {} ({}x{})", image.display(), width, height);
    for (i, rect) in layout.rects().iter().enumerate() {
        println!(
            "  Digit {}: row={} col={} height={} width={}",
            i, rect.row, rect.col, rect.height, rect.width
        );
    }
    Ok(())
}

fn debug_cmd(locator: &Locator, image: &Path, out_dir: &Path) -> CliResult<()> {
    let (pixels, width, height) = load_rgb(image)?;
    println!("Image: {} ({}x{})", image.display(), width, height);

    let mask = locator.mask(&pixels, width, height, 3)?;
    let stats = mask_stats(&mask);
    println!(
        "Mask: set_pixels={} total={} set_ratio={:.2}% rows={}",
        stats.set_pixels,
        stats.total_pixels,
        stats.set_ratio * 100.0,
        stats.rows_touched
    );

    let base = to_image(&pixels, width, height).ok_or("pixel buffer does not match dimensions")?;
    fs::create_dir_all(out_dir)?;
    let stem = image
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());

    let mask_path = out_dir.join(format!("P00_{}.png", stem));
    render_mask_overlay(&base, &mask).save(&mask_path)?;
    println!("Wrote {}", mask_path.display());

    let trace = locator.locate_in_mask(&mask)?;
    println!(
        "High-score band: rows {}..={} cols {}..={}",
        trace.primary.top, trace.primary.bottom, trace.bounds.left, trace.bounds.right
    );
    println!(
        "Remaining-count band: rows {}..={}",
        trace.secondary.top, trace.secondary.bottom
    );
    let g = &trace.geometry;
    println!(
        "Anchors: ({}, {}) -> ({}, {}) length={} wide={}",
        g.primary_anchor.x,
        g.primary_anchor.y,
        g.secondary_anchor.x,
        g.secondary_anchor.y,
        g.length,
        g.is_wide
    );
    println!(
        "Digits: size={} stride={:.3} start=({}, {})",
        g.digit_size, g.digit_stride, g.start.x, g.start.y
    );

    let layout_path = out_dir.join(format!("P01_{}.png", stem));
    render_layout_overlay(&base, &mask, &trace).save(&layout_path)?;
    println!("Wrote {}", layout_path.display());
    Ok(())
}

fn crop_cmd(locator: &Locator, image: &Path, out_dir: &Path, size: u32) -> CliResult<()> {
    let (pixels, width, height) = load_rgb(image)?;
    let layout = locator.locate(&pixels, width, height, 3)?;
    let base = to_image(&pixels, width, height).ok_or("pixel buffer does not match dimensions")?;

    fs::create_dir_all(out_dir)?;
    for (i, patch) in crop_digit_patches(&base, &layout, size).into_iter().enumerate() {
        match patch {
            Some(patch) => {
                let path = out_dir.join(format!("digit_{}.png", i));
                patch.save(&path)?;
                println!("Wrote {}", path.display());
            }
            None => println!("Digit {} lies outside the image", i),
        }
    }
    Ok(())
}

fn batch_cmd(
    locator: &Locator,
    root: Option<PathBuf>,
    limit: Option<usize>,
    labeled: bool,
) -> CliResult<()> {
    let dataset = Dataset::new(root.unwrap_or_else(dataset_root_from_env))
        .labeled_only(labeled)
        .with_limit(limit.or_else(bench_limit_from_env));

    let mut total = 0usize;
    let mut located = 0usize;
    let mut missing_band = 0usize;
    let mut other = 0usize;
    let start = Instant::now();

    for entry in dataset.entries() {
        let path = entry.path;
        total += 1;
        let (pixels, width, height) = match load_rgb(&path) {
            Ok(result) => result,
            Err(err) => {
                tracing::warn!("failed to load {}: {}", path.display(), err);
                other += 1;
                continue;
            }
        };

        let label = entry
            .label
            .map(|l| format!(" stage={} score={}", l.stage_id, l.score))
            .unwrap_or_default();
        match locator.locate(&pixels, width, height, 3) {
            Ok(layout) => {
                located += 1;
                let first = layout.rects()[0];
                println!(
                    "OK: {} -> size={} start=({}, {}){}",
                    path.display(),
                    layout.digit_size(),
                    first.col,
                    first.row,
                    label
                );
            }
            Err(err) => {
                if matches!(err, LocateError::BandNotFound(_)) {
                    missing_band += 1;
                } else {
                    other += 1;
                }
                println!("FAIL: {} -> {}{}", path.display(), err, label);
            }
        }
    }

    let rate = if total == 0 {
        0.0
    } else {
        100.0 * located as f64 / total as f64
    };
    println!(
        "\nResult: {}/{} ({:.1}%), band not found: {}, other: {}, elapsed: {:.2?}",
        located,
        total,
        rate,
        missing_band,
        other,
        start.elapsed()
    );
    Ok(())
}
