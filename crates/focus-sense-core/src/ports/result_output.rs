//! Result output port for writing session results.

use crate::domain::SessionResult;

/// Port for outputting session results.
pub trait ResultOutput: Send + Sync {
    /// Writes a single session result.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write(&self, result: &SessionResult) -> anyhow::Result<()>;

    /// Flushes any buffered output.
    ///
    /// # Errors
    ///
    /// Returns an error if flushing fails.
    fn flush(&self) -> anyhow::Result<()>;
}
