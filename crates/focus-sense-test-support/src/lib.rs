//! Test support utilities for focus-sense.
//!
//! Provides mocks, synthetic landmark fixture builders, and utilities
//! for testing the focus analysis pipeline.
//!
//! # Example
//!
//! ```
//! use focus_sense_test_support::{MockFrameSource, SyntheticFaceBuilder};
//!
//! // Create synthetic landmark fixtures
//! let calm = SyntheticFaceBuilder::steady_recording("calm", 20);
//! let empty = SyntheticFaceBuilder::faceless_recording("away", 5);
//!
//! // Create mock frame source
//! let source = MockFrameSource::new(vec![calm, empty]);
//! ```

mod builders;
mod mocks;

pub use builders::SyntheticFaceBuilder;
pub use mocks::{MockFrameSource, MockProgressSink, MockResultOutput};
