//! Fundamental types for the Kinemetry pipeline.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a capture session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub Uuid);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Tracked body landmarks (shoulders, hips, knees, ankles).
///
/// Detectors report many more keypoints (COCO defines 17); only these
/// eight are kept for movement analysis. Declaration order is the stable
/// reference order used throughout a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Landmark {
    LeftShoulder = 0,
    RightShoulder = 1,
    LeftHip = 2,
    RightHip = 3,
    LeftKnee = 4,
    RightKnee = 5,
    LeftAnkle = 6,
    RightAnkle = 7,
}

impl Landmark {
    pub const COUNT: usize = 8;

    /// All tracked landmarks in declaration order
    pub fn all() -> &'static [Landmark] {
        &[
            Landmark::LeftShoulder,
            Landmark::RightShoulder,
            Landmark::LeftHip,
            Landmark::RightHip,
            Landmark::LeftKnee,
            Landmark::RightKnee,
            Landmark::LeftAnkle,
            Landmark::RightAnkle,
        ]
    }

    /// Parse a detector keypoint name; non-tracked names return `None`
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "left_shoulder" => Some(Self::LeftShoulder),
            "right_shoulder" => Some(Self::RightShoulder),
            "left_hip" => Some(Self::LeftHip),
            "right_hip" => Some(Self::RightHip),
            "left_knee" => Some(Self::LeftKnee),
            "right_knee" => Some(Self::RightKnee),
            "left_ankle" => Some(Self::LeftAnkle),
            "right_ankle" => Some(Self::RightAnkle),
            _ => None,
        }
    }

    /// Detector-facing name, also used for CSV columns
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LeftShoulder => "left_shoulder",
            Self::RightShoulder => "right_shoulder",
            Self::LeftHip => "left_hip",
            Self::RightHip => "right_hip",
            Self::LeftKnee => "left_knee",
            Self::RightKnee => "right_knee",
            Self::LeftAnkle => "left_ankle",
            Self::RightAnkle => "right_ankle",
        }
    }
}

impl std::fmt::Display for Landmark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One keypoint as emitted by the external pose detector
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawKeypoint {
    pub name: String,
    pub x: f64,
    pub y: f64,
    /// Detection confidence; dropped during filtering
    pub score: Option<f32>,
}

impl RawKeypoint {
    pub fn new(name: impl Into<String>, x: f64, y: f64, score: Option<f32>) -> Self {
        Self {
            name: name.into(),
            x,
            y,
            score,
        }
    }

    /// The tracked landmark this keypoint maps to, if any
    pub fn landmark(&self) -> Option<Landmark> {
        Landmark::from_name(&self.name)
    }
}
