//! Focus Sense Adapters - External adapters for focus-sense.
//!
//! This crate provides the filesystem recording source: scanning for
//! landmark recordings and parsing their JSON Lines frame format.

pub mod fs;

pub use fs::FsFrameSource;
