//! JSON output adapter.

use std::io::{self, Write};
use std::sync::{Mutex, MutexGuard};

use anyhow::Result;
use focus_sense_core::{ResultOutput, SessionResult};

/// Writes session results as JSON Lines (or a single array) to a
/// shared writer.
pub struct JsonOutput {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonOutput {
    /// Creates a new JSON output writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout()))
    }

    /// Creates a new JSON output writing to the given writer.
    #[allow(dead_code)] // API for programmatic use
    #[must_use]
    pub fn new(writer: Box<dyn Write + Send>) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    fn locked(&self) -> Result<MutexGuard<'_, Box<dyn Write + Send>>> {
        self.writer
            .lock()
            .map_err(|e| anyhow::anyhow!("Lock poisoned: {e}"))
    }

    /// Writes a batch of session results as one JSON array.
    #[allow(clippy::significant_drop_tightening)]
    pub fn write_array(&self, results: &[SessionResult], pretty: bool) -> Result<()> {
        let json = if pretty {
            serde_json::to_string_pretty(results)?
        } else {
            serde_json::to_string(results)?
        };
        writeln!(self.locked()?, "{json}")?;
        Ok(())
    }
}

impl ResultOutput for JsonOutput {
    #[allow(clippy::significant_drop_tightening)]
    fn write(&self, result: &SessionResult) -> Result<()> {
        let json = serde_json::to_string(result)?;
        writeln!(self.locked()?, "{json}")?;
        Ok(())
    }

    #[allow(clippy::significant_drop_tightening)]
    fn flush(&self) -> Result<()> {
        self.locked()?.flush()?;
        Ok(())
    }
}
