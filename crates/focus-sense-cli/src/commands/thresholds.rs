//! Thresholds command - print the effective classifier thresholds.
//!
//! Resolves defaults, config files, and CLI flags the same way `check`
//! does, then prints the result as TOML so a user can paste it into a
//! `.focus-sense.toml` and tune from there.

use anyhow::{Context, Result};
use clap::Args;
use focus_sense_core::ClassifierConfig;
use serde::Serialize;

use crate::config::AppConfig;

/// Arguments for the thresholds command.
#[derive(Args, Clone)]
pub struct ThresholdsArgs {
    /// Blink EAR threshold override (0.0-1.0)
    #[arg(long, value_parser = super::check::parse_threshold)]
    pub blink_threshold: Option<f32>,

    /// Drowsy EAR floor override (0.0-1.0)
    #[arg(long, value_parser = super::check::parse_threshold)]
    pub drowsy_threshold: Option<f32>,

    /// Gaze depth/vertical ratio override (0.0-1.0)
    #[arg(long, value_parser = super::check::parse_threshold)]
    pub gaze_ratio: Option<f32>,
}

/// TOML document mirroring the config file's sections.
#[derive(Serialize)]
struct ThresholdsDoc {
    classifier: ClassifierDoc,
    gaze: GazeDoc,
}

#[derive(Serialize)]
struct ClassifierDoc {
    blink_threshold: f32,
    drowsy_threshold: f32,
    focused_ear_floor: f32,
    steady_ear_floor: f32,
    low_blink_rate: f32,
    steady_blink_rate: f32,
    high_blink_rate: f32,
}

#[derive(Serialize)]
struct GazeDoc {
    depth_ratio: f32,
}

impl From<ClassifierConfig> for ThresholdsDoc {
    fn from(c: ClassifierConfig) -> Self {
        Self {
            classifier: ClassifierDoc {
                blink_threshold: c.blink_ear_threshold,
                drowsy_threshold: c.drowsy_ear_threshold,
                focused_ear_floor: c.focused_ear_floor,
                steady_ear_floor: c.steady_ear_floor,
                low_blink_rate: c.low_blink_rate,
                steady_blink_rate: c.steady_blink_rate,
                high_blink_rate: c.high_blink_rate,
            },
            gaze: GazeDoc {
                depth_ratio: c.gaze_depth_ratio,
            },
        }
    }
}

/// Run the thresholds command.
pub fn run(args: &ThresholdsArgs, config: &AppConfig) -> Result<()> {
    let effective = resolve(args, config);
    let doc = ThresholdsDoc::from(effective);
    let toml = toml::to_string_pretty(&doc).context("serialize thresholds")?;
    print!("{toml}");
    Ok(())
}

/// Defaults < config file < CLI flags.
fn resolve(args: &ThresholdsArgs, config: &AppConfig) -> ClassifierConfig {
    let mut classifier = ClassifierConfig::default();

    if let Some(t) = config.classifier.blink_threshold {
        classifier.blink_ear_threshold = t;
    }
    if let Some(t) = config.classifier.drowsy_threshold {
        classifier.drowsy_ear_threshold = t;
    }
    if let Some(t) = config.classifier.focused_ear_floor {
        classifier.focused_ear_floor = t;
    }
    if let Some(t) = config.classifier.steady_ear_floor {
        classifier.steady_ear_floor = t;
    }
    if let Some(r) = config.classifier.low_blink_rate {
        classifier.low_blink_rate = r;
    }
    if let Some(r) = config.classifier.steady_blink_rate {
        classifier.steady_blink_rate = r;
    }
    if let Some(r) = config.classifier.high_blink_rate {
        classifier.high_blink_rate = r;
    }
    if let Some(r) = config.gaze.depth_ratio {
        classifier.gaze_depth_ratio = r;
    }

    if let Some(t) = args.blink_threshold {
        classifier.blink_ear_threshold = t;
    }
    if let Some(t) = args.drowsy_threshold {
        classifier.drowsy_ear_threshold = t;
    }
    if let Some(r) = args.gaze_ratio {
        classifier.gaze_depth_ratio = r;
    }

    classifier
}
