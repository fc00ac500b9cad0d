//! Filesystem adapter for loading landmark recordings.
//!
//! A recording is a JSON Lines file: one frame object per line,
//! `{"timestamp_ms": ..., "faces": [[{"index": 33, "x": ..., "y": ...,
//! "z": ...}, ...]]}`. Blank lines are ignored.

use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use focus_sense_core::{Frame, FrameSource, Recording};
use tracing::warn;

/// Supported recording extensions.
const RECORDING_EXTENSIONS: &[&str] = &["jsonl", "ndjson"];

/// Filesystem frame source adapter.
pub struct FsFrameSource {
    paths: Vec<PathBuf>,
    recursive: bool,
}

impl FsFrameSource {
    /// Creates a new filesystem frame source.
    ///
    /// # Arguments
    ///
    /// * `paths` - Files or directories to scan
    /// * `recursive` - Whether to recurse into subdirectories
    #[must_use]
    pub const fn new(paths: Vec<PathBuf>, recursive: bool) -> Self {
        Self { paths, recursive }
    }

    /// Collects all recording files from the configured paths.
    fn collect_files(&self) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for path in &self.paths {
            if path.is_file() {
                if is_recording(path) {
                    files.push(path.clone());
                } else {
                    warn!("Unsupported file type: {}", path.display());
                }
            } else if path.is_dir() {
                self.collect_from_dir(path, &mut files);
            } else {
                warn!("Path does not exist: {}", path.display());
            }
        }

        files.sort();
        files
    }

    fn collect_from_dir(&self, dir: &Path, files: &mut Vec<PathBuf>) {
        let entries = match std::fs::read_dir(dir) {
            Ok(e) => e,
            Err(e) => {
                warn!("Failed to read directory {}: {e}", dir.display());
                return;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_file() {
                if is_recording(&path) {
                    files.push(path);
                }
            } else if path.is_dir() && self.recursive {
                self.collect_from_dir(&path, files);
            }
        }
    }
}

impl FrameSource for FsFrameSource {
    fn recordings(&self) -> Box<dyn Iterator<Item = Result<Recording>> + Send + '_> {
        Box::new(self.collect_files().into_iter().map(|path| {
            load_recording(&path).with_context(|| format!("Failed to load {}", path.display()))
        }))
    }

    fn count_hint(&self) -> Option<usize> {
        Some(self.collect_files().len())
    }
}

/// Whether the path carries a supported recording extension.
fn is_recording(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| {
            let ext = ext.to_ascii_lowercase();
            RECORDING_EXTENSIONS.contains(&ext.as_str())
        })
}

/// Loads and parses one JSON Lines recording.
fn load_recording(path: &Path) -> Result<Recording> {
    let file = std::fs::File::open(path).context("open recording")?;
    let reader = BufReader::new(file);

    let mut frames = Vec::new();
    for (line_no, line) in reader.lines().enumerate() {
        let line = line.context("read recording line")?;
        if line.trim().is_empty() {
            continue;
        }
        let frame: Frame = serde_json::from_str(&line)
            .with_context(|| format!("parse frame at line {}", line_no + 1))?;
        frames.push(frame);
    }

    Ok(Recording::new(path.display().to_string(), frames))
}
