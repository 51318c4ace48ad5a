//! JSON dump of the filtered keypoint history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use kinemetry_core::{MovementAggregator, Result, SessionId, Snapshot};

/// Filtered snapshot history with session metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeypointDump {
    pub session_id: SessionId,
    /// Identifying label, typically the source video file name
    pub label: String,
    pub exported_at: DateTime<Utc>,
    pub frames: Vec<Snapshot>,
}

impl KeypointDump {
    pub fn new(aggregator: &MovementAggregator, label: impl Into<String>) -> Self {
        Self {
            session_id: aggregator.session_id(),
            label: label.into(),
            exported_at: Utc::now(),
            frames: aggregator.history().to_vec(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        let json = serde_json::to_string_pretty(self)?;
        tracing::debug!(
            session = %self.session_id,
            frames = self.frames.len(),
            "keypoint history serialized"
        );
        Ok(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinemetry_core::RawKeypoint;

    #[test]
    fn test_dump_roundtrip() {
        let mut agg = MovementAggregator::new();
        agg.ingest(&[RawKeypoint::new("left_ankle", 1.0, 2.0, Some(0.9))])
            .unwrap();
        agg.ingest(&[RawKeypoint::new("left_ankle", 1.5, 2.5, Some(0.9))])
            .unwrap();

        let dump = KeypointDump::new(&agg, "clip.mp4");
        let json = dump.to_json().unwrap();

        let restored: KeypointDump = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.label, "clip.mp4");
        assert_eq!(restored.session_id, agg.session_id());
        assert_eq!(restored.frames.len(), 2);
        assert_eq!(restored.frames, agg.history().to_vec());
    }

    #[test]
    fn test_dump_uses_snake_case_landmarks() {
        let mut agg = MovementAggregator::new();
        agg.ingest(&[RawKeypoint::new("right_hip", 3.0, 4.0, None)])
            .unwrap();

        let json = KeypointDump::new(&agg, "clip.mp4").to_json().unwrap();
        assert!(json.contains("\"right_hip\""));
    }
}
