//! Frame source port for loading landmark recordings.

use crate::domain::Recording;

/// Port for loading landmark recordings from a source.
///
/// This is the seam behind which the landmark provider lives. Anything
/// that can deliver indexed keypoint frames satisfies it, whether a
/// recorded file or a test fixture.
pub trait FrameSource: Send + Sync {
    /// Returns an iterator over recordings from this source.
    ///
    /// # Errors
    ///
    /// Individual items may be errors if a recording fails to load.
    fn recordings(&self) -> Box<dyn Iterator<Item = anyhow::Result<Recording>> + Send + '_>;

    /// Returns the total number of recordings, if known.
    fn count_hint(&self) -> Option<usize>;
}
