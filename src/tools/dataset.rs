//! Screenshot collections on disk
//!
//! A dataset is a directory tree of result screenshots. Files named
//! `<stage>-<player>-<score>.<ext>` carry their ground-truth score; anything
//! else is an unlabeled capture.

use super::{ScreenshotLabel, parse_label};
use crate::config::parse_env_usize;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory used when `SCORE_DATASET_ROOT` is unset
pub const DEFAULT_DATASET_ROOT: &str = "data/2c";

const SCREENSHOT_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "bmp", "jfif"];

/// Dataset root from `SCORE_DATASET_ROOT`
pub fn dataset_root_from_env() -> PathBuf {
    std::env::var_os("SCORE_DATASET_ROOT")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET_ROOT))
}

/// Screenshot cap from `SCORE_BENCH_LIMIT`; unset or `0` means no cap
pub fn bench_limit_from_env() -> Option<usize> {
    Some(parse_env_usize("SCORE_BENCH_LIMIT", 0)).filter(|&n| n > 0)
}

/// One screenshot and the score its file name claims, if any
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetEntry {
    /// Image path
    pub path: PathBuf,
    /// Parsed file-name label
    pub label: Option<ScreenshotLabel>,
}

impl DatasetEntry {
    fn from_path(path: PathBuf) -> Self {
        let label = parse_label(&path);
        Self { path, label }
    }
}

/// Query over a screenshot directory
#[derive(Debug, Clone)]
pub struct Dataset {
    root: PathBuf,
    labeled_only: bool,
    limit: Option<usize>,
}

impl Dataset {
    /// Every screenshot under `root`
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
            labeled_only: false,
            limit: None,
        }
    }

    /// Root and limit taken from the environment
    pub fn from_env() -> Self {
        Self::new(dataset_root_from_env()).with_limit(bench_limit_from_env())
    }

    /// Skip screenshots whose name carries no score
    pub fn labeled_only(mut self, labeled_only: bool) -> Self {
        self.labeled_only = labeled_only;
        self
    }

    /// Keep at most `limit` entries, counted after label filtering
    pub fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    /// Directory being scanned
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Matching screenshots in path order
    pub fn entries(&self) -> Vec<DatasetEntry> {
        let mut paths = Vec::new();
        walk(&self.root, &mut paths);
        paths.sort();

        paths
            .into_iter()
            .map(DatasetEntry::from_path)
            .filter(|entry| !self.labeled_only || entry.label.is_some())
            .take(self.limit.unwrap_or(usize::MAX))
            .collect()
    }
}

fn is_screenshot(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| SCREENSHOT_EXTENSIONS.contains(&ext.as_str()))
}

/// Unreadable directories are skipped.
fn walk(dir: &Path, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            walk(&path, out);
        } else if is_screenshot(&path) {
            out.push(path);
        }
    }
}
