//! Core domain types for focus analysis.

mod landmarks;
mod reading;
mod result;

pub use landmarks::{mesh, Frame, Landmark, LandmarkSet, Recording};
pub use reading::{EyeMetrics, FocusReading, FocusState};
pub use result::{FrameRecord, FrameStatus, SessionResult, SessionSummary};
