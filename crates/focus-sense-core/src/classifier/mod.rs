//! EAR-based attention classification.
//!
//! Turns one frame's facial keypoints into a three-way focus label,
//! smoothed over recent blink history:
//! - `ear`: eye aspect ratio from eyelid/corner landmark geometry
//! - `blink`: falling-edge blink detection over a bounded sample window
//! - `gaze`: coarse head-pose screen-direction check
//! - `session`: the stateful `FocusSession` tying it together

mod blink;
mod config;
mod ear;
mod gaze;
mod session;

pub use blink::BlinkWindow;
pub use config::ClassifierConfig;
pub use ear::{eye_metrics, OPEN_EYE_EAR};
pub use gaze::is_looking_at_screen;
pub use session::FocusSession;
