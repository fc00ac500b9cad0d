//! Progress reporting adapter using indicatif.

use focus_sense_core::{FocusState, ProgressEvent, ProgressSink};
use indicatif::{ProgressBar as IndicatifBar, ProgressStyle};

/// How progress is surfaced on stderr.
enum Mode {
    /// No output at all.
    Quiet,
    /// Interactive bar.
    Bar(IndicatifBar),
    /// Per-session status lines for non-interactive runs.
    Lines,
}

/// Progress adapter for CLI output.
#[allow(dead_code)]
pub struct ProgressBar {
    mode: Mode,
}

impl ProgressBar {
    /// Creates a progress adapter.
    ///
    /// `quiet` suppresses everything; otherwise `show_bar` selects the
    /// interactive bar over plain status lines.
    #[allow(dead_code)]
    #[must_use]
    pub fn new(total: Option<u64>, quiet: bool, show_bar: bool) -> Self {
        let mode = if quiet {
            Mode::Quiet
        } else if show_bar {
            let bar = total.map_or_else(IndicatifBar::new_spinner, IndicatifBar::new);
            if let Ok(style) = ProgressStyle::default_bar().template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta})",
            ) {
                bar.set_style(style.progress_chars("#>-"));
            }
            Mode::Bar(bar)
        } else {
            Mode::Lines
        };

        Self { mode }
    }
}

impl ProgressSink for ProgressBar {
    #[allow(clippy::cast_possible_truncation)]
    fn on_event(&self, event: ProgressEvent) {
        if matches!(self.mode, Mode::Quiet) {
            return;
        }

        match event {
            ProgressEvent::Started { path, index, total } => {
                if let Mode::Bar(bar) = &self.mode {
                    if let Some(t) = total {
                        bar.set_length(t as u64);
                    }
                    bar.set_position(index as u64);
                    bar.set_message(path);
                }
            }
            ProgressEvent::Completed { result } => match &self.mode {
                Mode::Bar(bar) => bar.inc(1),
                Mode::Lines => {
                    if result.summary.dominant_state == Some(FocusState::Stressed) {
                        eprintln!("{}: stress-dominant session", result.path);
                    }
                }
                Mode::Quiet => {}
            },
            ProgressEvent::Skipped { path, reason } => {
                if let Mode::Bar(bar) = &self.mode {
                    bar.inc(1);
                }
                eprintln!("WARN: Skipping {path}: {reason}");
            }
            ProgressEvent::Finished { processed, skipped } => {
                if let Mode::Bar(bar) = &self.mode {
                    bar.finish_with_message(format!(
                        "Done: {processed} processed, {skipped} skipped"
                    ));
                }
            }
        }
    }
}
