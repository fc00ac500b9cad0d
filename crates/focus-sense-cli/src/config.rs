//! Configuration file support for focus-sense.
//!
//! Supports TOML configuration from:
//! - XDG config: `~/.config/focus-sense/config.toml` (lowest priority)
//! - Project-local: `.focus-sense.toml` (searched up directory tree)
//! - CLI flags (highest priority, applied separately)

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

/// Top-level configuration structure.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// General options.
    pub general: GeneralConfig,
    /// Classifier threshold settings.
    pub classifier: ClassifierSection,
    /// Head-pose gaze check settings.
    pub gaze: GazeConfig,
    /// Output formatting settings.
    pub output: OutputConfig,
}

/// General configuration options.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Recurse into subdirectories by default.
    pub recursive: Option<bool>,
}

/// Classifier threshold configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct ClassifierSection {
    /// Blink EAR threshold (0.0-1.0).
    pub blink_threshold: Option<f32>,
    /// Drowsy EAR floor (0.0-1.0).
    pub drowsy_threshold: Option<f32>,
    /// EAR floor for the low-rate focused rule (0.0-1.0).
    pub focused_ear_floor: Option<f32>,
    /// EAR floor for the mid-rate focused rule (0.0-1.0).
    pub steady_ear_floor: Option<f32>,
    /// Low blink-rate bound (per minute).
    pub low_blink_rate: Option<f32>,
    /// Upper bound of the mid blink-rate band (per minute).
    pub steady_blink_rate: Option<f32>,
    /// Stressed blink-rate bound (per minute).
    pub high_blink_rate: Option<f32>,
}

/// Gaze check configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct GazeConfig {
    /// Maximum nose depth/vertical ratio before the face counts as
    /// turned away.
    pub depth_ratio: Option<f32>,
}

/// Output formatting configuration.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format: "json" or "jsonl".
    pub format: Option<String>,
    /// Pretty-print JSON output.
    pub pretty: Option<bool>,
    /// Include per-frame records.
    pub frames: Option<bool>,
    /// Show progress bar.
    pub progress: Option<bool>,
}

impl AppConfig {
    /// Load configuration from XDG and project-local files.
    ///
    /// Priority (lowest to highest):
    /// 1. XDG config: `~/.config/focus-sense/config.toml`
    /// 2. Project-local: `.focus-sense.toml` (searched up from cwd)
    ///
    /// Missing files are silently ignored. Invalid values are logged
    /// as warnings.
    pub fn load() -> Self {
        let mut config = Self::default();

        // Load XDG config (lowest priority)
        if let Some(xdg_path) = xdg_config_path() {
            if xdg_path.exists() {
                info!("Loading XDG config: {}", xdg_path.display());
                if let Some(xdg_config) = load_file(&xdg_path) {
                    config = xdg_config;
                }
            } else {
                debug!("XDG config not found: {}", xdg_path.display());
            }
        }

        // Load project-local config (higher priority, merged)
        if let Some(project_path) = find_project_config() {
            info!("Loading project config: {}", project_path.display());
            if let Some(project_config) = load_file(&project_path) {
                config.merge(project_config);
            }
        }

        // Validate merged config
        if let Err(e) = config.validate() {
            eprintln!("warning: {e}");
        }

        config
    }

    /// Validate configuration values are within acceptable ranges.
    fn validate(&self) -> Result<(), String> {
        // EAR thresholds are ratios (0.0-1.0 range)
        let ear_fields = [
            ("classifier.blink_threshold", self.classifier.blink_threshold),
            (
                "classifier.drowsy_threshold",
                self.classifier.drowsy_threshold,
            ),
            (
                "classifier.focused_ear_floor",
                self.classifier.focused_ear_floor,
            ),
            (
                "classifier.steady_ear_floor",
                self.classifier.steady_ear_floor,
            ),
        ];
        for (name, value) in ear_fields {
            if let Some(t) = value {
                if !(0.0..=1.0).contains(&t) {
                    return Err(format!("{name} must be 0.0-1.0, got {t}"));
                }
            }
        }

        // Blink rates are per-minute counts
        let rate_fields = [
            ("classifier.low_blink_rate", self.classifier.low_blink_rate),
            (
                "classifier.steady_blink_rate",
                self.classifier.steady_blink_rate,
            ),
            (
                "classifier.high_blink_rate",
                self.classifier.high_blink_rate,
            ),
        ];
        for (name, value) in rate_fields {
            if let Some(r) = value {
                if !r.is_finite() || r < 0.0 {
                    return Err(format!("{name} must be a non-negative number, got {r}"));
                }
            }
        }

        if let Some(r) = self.gaze.depth_ratio {
            if !r.is_finite() || r < 0.0 {
                return Err(format!("gaze.depth_ratio must be non-negative, got {r}"));
            }
        }

        // Output format validation
        if let Some(ref f) = self.output.format {
            if f != "json" && f != "jsonl" {
                return Err(format!("output.format must be 'json' or 'jsonl', got '{f}'"));
            }
        }

        Ok(())
    }

    /// Merge another config into this one.
    /// Values from `other` override values in `self` when present.
    fn merge(&mut self, other: Self) {
        // General
        self.general.recursive = other.general.recursive.or(self.general.recursive);

        // Classifier
        self.classifier.blink_threshold = other
            .classifier
            .blink_threshold
            .or(self.classifier.blink_threshold);
        self.classifier.drowsy_threshold = other
            .classifier
            .drowsy_threshold
            .or(self.classifier.drowsy_threshold);
        self.classifier.focused_ear_floor = other
            .classifier
            .focused_ear_floor
            .or(self.classifier.focused_ear_floor);
        self.classifier.steady_ear_floor = other
            .classifier
            .steady_ear_floor
            .or(self.classifier.steady_ear_floor);
        self.classifier.low_blink_rate = other
            .classifier
            .low_blink_rate
            .or(self.classifier.low_blink_rate);
        self.classifier.steady_blink_rate = other
            .classifier
            .steady_blink_rate
            .or(self.classifier.steady_blink_rate);
        self.classifier.high_blink_rate = other
            .classifier
            .high_blink_rate
            .or(self.classifier.high_blink_rate);

        // Gaze
        self.gaze.depth_ratio = other.gaze.depth_ratio.or(self.gaze.depth_ratio);

        // Output
        self.output.format = other.output.format.or_else(|| self.output.format.take());
        self.output.pretty = other.output.pretty.or(self.output.pretty);
        self.output.frames = other.output.frames.or(self.output.frames);
        self.output.progress = other.output.progress.or(self.output.progress);
    }
}

/// Get the XDG config file path.
fn xdg_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("focus-sense").join("config.toml"))
}

/// Find project-local config by searching up from current directory.
fn find_project_config() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_in_parents(&cwd)
}

/// Search for `.focus-sense.toml` in the given directory and its parents.
fn find_config_in_parents(start: &Path) -> Option<PathBuf> {
    let mut current = Some(start);

    while let Some(dir) = current {
        let config_path = dir.join(".focus-sense.toml");
        if config_path.exists() {
            return Some(config_path);
        }
        current = dir.parent();
    }

    None
}

/// Load and parse a TOML config file.
fn load_file(path: &Path) -> Option<AppConfig> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::warn!("Failed to read config file {}: {}", path.display(), e);
            return None;
        }
    };

    match toml::from_str(&content) {
        Ok(config) => Some(config),
        Err(e) => {
            tracing::warn!("Failed to parse config file {}: {}", path.display(), e);
            None
        }
    }
}
