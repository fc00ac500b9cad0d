//! Check command - analyze landmark recordings for attention state.

use std::io::IsTerminal;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Args, ValueEnum};
use focus_sense_adapters::FsFrameSource;
use focus_sense_core::{
    run_session, ClassifierConfig, FocusState, FrameSource, ProgressEvent, SessionResult,
};
use tracing::{debug, info};

use super::ExitCode;
use crate::config::AppConfig;
use crate::output::{JsonOutput, ProgressBar};

/// Output format for results.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// JSON Lines (one JSON object per line)
    #[default]
    Jsonl,
    /// Single JSON array
    Json,
}

/// Parse and validate a threshold value (0.0-1.0).
pub(crate) fn parse_threshold(s: &str) -> Result<f32, String> {
    let value: f32 = s
        .parse()
        .map_err(|_| format!("'{s}' is not a valid number"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("{value} is not in 0.0..=1.0"))
    }
}

/// Shared arguments for recording analysis.
#[derive(Args, Clone)]
#[allow(clippy::struct_excessive_bools)]
pub struct CheckArgs {
    /// Recording files or directories to analyze
    pub paths: Vec<PathBuf>,

    /// Recurse into subdirectories
    #[arg(short, long)]
    pub recursive: bool,

    /// Include per-frame records in the output
    #[arg(long)]
    pub frames: bool,

    /// Blink EAR threshold (0.0-1.0)
    #[arg(long, value_parser = parse_threshold)]
    pub blink_threshold: Option<f32>,

    /// Drowsy EAR floor (0.0-1.0)
    #[arg(long, value_parser = parse_threshold)]
    pub drowsy_threshold: Option<f32>,

    /// Gaze depth/vertical ratio limit (0.0-1.0)
    #[arg(long, value_parser = parse_threshold)]
    pub gaze_ratio: Option<f32>,

    /// Show progress bar
    #[arg(long)]
    pub progress: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Pretty-print JSON output (only affects --format json)
    #[arg(long)]
    pub pretty: bool,

    /// Merged config (populated by `with_config`, not from CLI).
    #[arg(skip)]
    config: Option<AppConfig>,
}

impl CheckArgs {
    /// Apply configuration file values, respecting CLI precedence.
    ///
    /// Layering priority (lowest to highest):
    /// 1. Hardcoded classifier defaults
    /// 2. Config file values (XDG, then project-local)
    /// 3. CLI arguments (already set on self)
    pub fn with_config(mut args: Self, config: &AppConfig) -> Self {
        // Recursive: config applies only if CLI --recursive not passed
        if !args.recursive {
            args.recursive = config.general.recursive.unwrap_or(false);
        }

        // Thresholds: CLI > config (classifier defaults fill the rest)
        args.blink_threshold = args.blink_threshold.or(config.classifier.blink_threshold);
        args.drowsy_threshold = args.drowsy_threshold.or(config.classifier.drowsy_threshold);
        args.gaze_ratio = args.gaze_ratio.or(config.gaze.depth_ratio);

        // Output format: CLI > config
        if args.format.is_none() {
            args.format = config
                .output
                .format
                .as_ref()
                .and_then(|s| match s.as_str() {
                    "json" => Some(OutputFormat::Json),
                    "jsonl" => Some(OutputFormat::Jsonl),
                    _ => None,
                });
        }

        // Boolean output options: CLI flag wins, then config
        if !args.pretty {
            args.pretty = config.output.pretty.unwrap_or(false);
        }
        if !args.frames {
            args.frames = config.output.frames.unwrap_or(false);
        }
        if !args.progress {
            args.progress = config.output.progress.unwrap_or(false);
        }

        // Store config so classifier_config can reach advanced fields
        args.config = Some(config.clone());

        args
    }

    /// Build the effective classifier thresholds from args + config.
    pub fn classifier_config(&self) -> ClassifierConfig {
        let mut classifier = ClassifierConfig::default();
        let config = self.config.as_ref();

        if let Some(t) = self.blink_threshold {
            classifier.blink_ear_threshold = t;
        }
        if let Some(t) = self.drowsy_threshold {
            classifier.drowsy_ear_threshold = t;
        }
        if let Some(r) = self.gaze_ratio {
            classifier.gaze_depth_ratio = r;
        }
        if let Some(t) = config.and_then(|c| c.classifier.focused_ear_floor) {
            classifier.focused_ear_floor = t;
        }
        if let Some(t) = config.and_then(|c| c.classifier.steady_ear_floor) {
            classifier.steady_ear_floor = t;
        }
        if let Some(r) = config.and_then(|c| c.classifier.low_blink_rate) {
            classifier.low_blink_rate = r;
        }
        if let Some(r) = config.and_then(|c| c.classifier.steady_blink_rate) {
            classifier.steady_blink_rate = r;
        }
        if let Some(r) = config.and_then(|c| c.classifier.high_blink_rate) {
            classifier.high_blink_rate = r;
        }

        classifier
    }

    /// Get output format with fallback to JSONL.
    fn format(&self) -> OutputFormat {
        self.format.unwrap_or(OutputFormat::Jsonl)
    }
}

/// Result of running the check command.
#[allow(dead_code)] // Fields exposed for programmatic use
pub struct CheckResult {
    /// Number of recordings processed.
    pub processed: usize,
    /// Number of recordings skipped.
    pub skipped: usize,
    /// Number of stress-dominant sessions.
    pub stressed: usize,
    /// Exit code.
    pub exit_code: ExitCode,
}

/// Run the check command.
///
/// Expects `args` to have been processed through `with_config()` first
/// to apply configuration file settings.
pub fn run(args: &CheckArgs) -> Result<CheckResult> {
    info!("Running check command on {} paths", args.paths.len());

    if args.paths.is_empty() {
        anyhow::bail!("No paths specified");
    }

    // Initialize frame source
    let source = FsFrameSource::new(args.paths.clone(), args.recursive);
    let total = source.count_hint();

    // Determine if we should show progress
    let show_progress = !args.quiet && (args.progress || std::io::stderr().is_terminal());

    // Initialize progress bar
    let progress_bar = ProgressBar::new(total.map(|t| t as u64), args.quiet, show_progress);

    // Initialize output adapter
    let output = JsonOutput::stdout();

    let classifier = args.classifier_config();
    debug!(?classifier, "effective thresholds");

    process_recordings(&source, classifier, &output, &progress_bar, args)
}

/// Process recordings through the session runner.
fn process_recordings(
    source: &FsFrameSource,
    classifier: ClassifierConfig,
    output: &JsonOutput,
    progress: &ProgressBar,
    args: &CheckArgs,
) -> Result<CheckResult> {
    use focus_sense_core::{ProgressSink, ResultOutput};

    let total = source.count_hint();
    let mut processed = 0usize;
    let mut skipped = 0usize;
    let mut stressed = 0usize;
    let mut all_results: Vec<SessionResult> = Vec::new();

    for (index, recording_result) in source.recordings().enumerate() {
        let recording = match recording_result {
            Ok(rec) => rec,
            Err(e) => {
                // Error message carries the path via anyhow context
                progress.on_event(ProgressEvent::Skipped {
                    path: format!("recording {index}"),
                    reason: e.to_string(),
                });
                skipped += 1;
                continue;
            }
        };

        let path = recording.path.clone();

        progress.on_event(ProgressEvent::Started {
            path,
            index,
            total,
        });

        let result = run_session(&recording, classifier, iso_timestamp(), args.frames);

        if result.summary.dominant_state == Some(FocusState::Stressed) {
            stressed += 1;
        }

        progress.on_event(ProgressEvent::Completed {
            result: result.clone(),
        });

        // Output based on format
        match args.format() {
            OutputFormat::Jsonl => {
                output.write(&result)?;
            }
            OutputFormat::Json => {
                all_results.push(result);
            }
        }

        processed += 1;
    }

    // For JSON format, output all results as array via adapter
    if matches!(args.format(), OutputFormat::Json) {
        output.write_array(&all_results, args.pretty)?;
    }

    output.flush()?;

    progress.on_event(ProgressEvent::Finished { processed, skipped });

    let exit_code = if stressed > 0 {
        ExitCode::StressFound
    } else {
        ExitCode::Success
    };

    Ok(CheckResult {
        processed,
        skipped,
        stressed,
        exit_code,
    })
}

/// Generate ISO 8601 UTC timestamp (RFC 3339 format).
fn iso_timestamp() -> String {
    match time::OffsetDateTime::now_utc().format(&time::format_description::well_known::Rfc3339) {
        Ok(ts) => ts,
        Err(e) => {
            debug!("Timestamp format failed: {e}");
            String::from("1970-01-01T00:00:00Z")
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_threshold_accepts_range() {
        assert!(parse_threshold("0.0").is_ok());
        assert!(parse_threshold("0.21").is_ok());
        assert!(parse_threshold("1.0").is_ok());
    }

    #[test]
    fn test_parse_threshold_rejects_out_of_range() {
        assert!(parse_threshold("1.5").is_err());
        assert!(parse_threshold("-0.1").is_err());
        assert!(parse_threshold("abc").is_err());
    }

    #[test]
    fn test_classifier_config_defaults_without_overrides() {
        let args = CheckArgs {
            paths: vec![],
            recursive: false,
            frames: false,
            blink_threshold: None,
            drowsy_threshold: None,
            gaze_ratio: None,
            progress: false,
            quiet: false,
            format: None,
            pretty: false,
            config: None,
        };

        let classifier = args.classifier_config();
        assert!((classifier.blink_ear_threshold - 0.21).abs() < f32::EPSILON);
        assert!((classifier.high_blink_rate - 25.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_cli_threshold_beats_config() {
        let config: AppConfig = toml::from_str(
            r"
[classifier]
blink_threshold = 0.25
drowsy_threshold = 0.10
",
        )
        .unwrap();

        let args = CheckArgs {
            paths: vec![],
            recursive: false,
            frames: false,
            blink_threshold: Some(0.19),
            drowsy_threshold: None,
            gaze_ratio: None,
            progress: false,
            quiet: false,
            format: None,
            pretty: false,
            config: None,
        };

        let merged = CheckArgs::with_config(args, &config);
        let classifier = merged.classifier_config();

        // CLI flag wins
        assert!((classifier.blink_ear_threshold - 0.19).abs() < f32::EPSILON);
        // Config fills what the CLI left unset
        assert!((classifier.drowsy_ear_threshold - 0.10).abs() < f32::EPSILON);
    }
}
