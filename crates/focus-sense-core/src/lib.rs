//! Focus Sense Core - Domain logic and attention classification
//!
//! This crate contains the core domain types, the EAR-based focus
//! classifier session, and the runner that turns a recorded landmark
//! stream into a per-session attention report.

pub mod classifier;
pub mod domain;
pub mod ports;
pub mod runner;

pub use classifier::{ClassifierConfig, FocusSession};
pub use domain::{
    EyeMetrics, FocusReading, FocusState, Frame, FrameRecord, FrameStatus, Landmark, LandmarkSet,
    Recording, SessionResult, SessionSummary,
};
pub use ports::{FrameSource, ProgressEvent, ProgressSink, ResultOutput};
pub use runner::run_session;
