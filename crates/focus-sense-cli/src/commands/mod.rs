//! CLI command definitions and handlers.

pub mod check;
pub mod thresholds;

use clap::{Parser, Subcommand};

/// Focus Sense - Attention analysis for recorded landmark streams
#[derive(Parser)]
#[command(name = "focus-sense")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Shared check arguments (paths, thresholds, flags).
    #[command(flatten)]
    pub check: check::CheckArgs,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze landmark recordings for attention state
    Check(check::CheckArgs),
    /// Print the effective classifier thresholds as TOML
    Thresholds(thresholds::ThresholdsArgs),
}

/// Process exit codes.
///
/// The stress signal is surfaced through the exit code so shell
/// pipelines can gate on it without parsing the JSON output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// All recordings analyzed; none stress-dominant.
    Success,
    /// At least one session came out stress-dominant.
    StressFound,
    /// A hard error stopped the run.
    Error,
}

impl ExitCode {
    const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::StressFound => 1,
            Self::Error => 2,
        }
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code.code())
    }
}
