//! # Kinemetry-Core
//!
//! Core types and movement aggregation for the Kinemetry pose-keypoint
//! movement statistics pipeline.
//!
//! An external pose detector produces one keypoint list per video frame.
//! This crate filters each frame to the tracked landmark set, records
//! frame-to-frame displacement, and summarizes a capture session into
//! per-landmark movement statistics.

pub mod aggregator;
pub mod error;
pub mod geometry;
pub mod movement;
pub mod snapshot;
pub mod types;

pub use aggregator::*;
pub use error::{Error, Result};
pub use geometry::*;
pub use movement::*;
pub use snapshot::*;
pub use types::*;
