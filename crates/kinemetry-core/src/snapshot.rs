//! Per-frame keypoint snapshots.
//!
//! A snapshot is one frame's detector output filtered to the tracked
//! landmark set, with coordinates rounded to session precision and the
//! confidence score dropped. Filtering is idempotent.

use serde::{Deserialize, Serialize};

use crate::geometry::Point2D;
use crate::types::{Landmark, RawKeypoint};

/// One tracked landmark position within a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackedKeypoint {
    pub landmark: Landmark,
    pub position: Point2D,
}

impl TrackedKeypoint {
    pub fn new(landmark: Landmark, position: Point2D) -> Self {
        Self { landmark, position }
    }
}

/// Filtered, rounded keypoints for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    keypoints: Vec<TrackedKeypoint>,
}

impl Snapshot {
    /// Filter a raw detector frame to the tracked landmarks.
    ///
    /// Keeps the detector's ordering of the surviving keypoints; the
    /// aggregator reorders against the session baseline afterwards.
    pub fn from_raw(raw: &[RawKeypoint]) -> Self {
        let keypoints = raw
            .iter()
            .filter_map(|kp| {
                kp.landmark().map(|landmark| {
                    TrackedKeypoint::new(landmark, Point2D::new(kp.x, kp.y).rounded())
                })
            })
            .collect();

        Self { keypoints }
    }

    pub fn from_keypoints(keypoints: Vec<TrackedKeypoint>) -> Self {
        Self { keypoints }
    }

    pub fn len(&self) -> usize {
        self.keypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keypoints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TrackedKeypoint> {
        self.keypoints.iter()
    }

    /// Look up a landmark's position in this snapshot
    pub fn get(&self, landmark: Landmark) -> Option<&TrackedKeypoint> {
        self.keypoints.iter().find(|kp| kp.landmark == landmark)
    }

    /// Landmark order of this snapshot
    pub fn landmarks(&self) -> Vec<Landmark> {
        self.keypoints.iter().map(|kp| kp.landmark).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw_frame() -> Vec<RawKeypoint> {
        vec![
            RawKeypoint::new("nose", 100.0, 50.0, Some(0.99)),
            RawKeypoint::new("left_shoulder", 120.123456, 200.98765, Some(0.9)),
            RawKeypoint::new("right_shoulder", 180.5, 201.0, Some(0.8)),
            RawKeypoint::new("left_elbow", 110.0, 260.0, Some(0.7)),
            RawKeypoint::new("left_knee", 130.0, 400.0, None),
        ]
    }

    #[test]
    fn test_filter_drops_untracked() {
        let snapshot = Snapshot::from_raw(&raw_frame());
        assert_eq!(snapshot.len(), 3);
        assert!(snapshot.get(Landmark::LeftShoulder).is_some());
        assert!(snapshot.get(Landmark::LeftKnee).is_some());
        assert_eq!(
            snapshot.landmarks(),
            vec![
                Landmark::LeftShoulder,
                Landmark::RightShoulder,
                Landmark::LeftKnee
            ]
        );
    }

    #[test]
    fn test_filter_rounds_coordinates() {
        let snapshot = Snapshot::from_raw(&raw_frame());
        let shoulder = snapshot.get(Landmark::LeftShoulder).unwrap();
        assert_eq!(shoulder.position, Point2D::new(120.1235, 200.9877));
    }

    #[test]
    fn test_filter_idempotent() {
        let once = Snapshot::from_raw(&raw_frame());

        // feed the filtered snapshot back through as raw keypoints
        let as_raw: Vec<RawKeypoint> = once
            .iter()
            .map(|kp| RawKeypoint::new(kp.landmark.as_str(), kp.position.x, kp.position.y, None))
            .collect();
        let twice = Snapshot::from_raw(&as_raw);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_frame() {
        let snapshot = Snapshot::from_raw(&[]);
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.len(), 0);
    }
}
