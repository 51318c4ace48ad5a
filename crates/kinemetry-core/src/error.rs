//! Error types for the Kinemetry pipeline.

use thiserror::Error;

use crate::types::Landmark;

#[derive(Error, Debug)]
pub enum Error {
    #[error("snapshot shape mismatch: expected {expected} tracked landmarks, got {actual}")]
    SnapshotShape { expected: usize, actual: usize },

    #[error("landmark mismatch: {landmark} not present in session baseline")]
    LandmarkMismatch { landmark: Landmark },

    #[error("insufficient data: need {required} snapshots, have {available}")]
    InsufficientData { required: usize, available: usize },

    #[error("invalid duration: {value} (must be finite and positive)")]
    InvalidDuration { value: f64 },

    #[error("summary header mismatch: table has {expected:?}, row has {actual:?}")]
    TableHeader { expected: String, actual: String },

    #[error("session table is empty")]
    EmptyTable,

    #[error("serialization error: {0}")]
    Serialization(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
