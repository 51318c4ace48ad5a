//! # Kinemetry-Export
//!
//! Output assembly for the Kinemetry pipeline: raw keypoint CSV dumps,
//! per-session summary CSV rows, the multi-session summary table, and
//! the filtered-keypoint JSON dump. Callers own all file I/O; this crate
//! only produces strings.

pub mod csv;
pub mod json;
pub mod naming;
pub mod table;

pub use csv::*;
pub use json::*;
pub use naming::*;
pub use table::*;
