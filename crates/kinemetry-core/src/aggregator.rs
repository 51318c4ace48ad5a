//! Session-scoped movement aggregation.
//!
//! Strictly accumulate-then-summarize: each ingested frame extends the
//! snapshot history and movement log; summary statistics are computed on
//! demand. One aggregator per capture session, no shared state.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::round_coord;
use crate::movement::{population_std_dev, MovementRecord};
use crate::snapshot::Snapshot;
use crate::types::{Landmark, RawKeypoint, SessionId};

/// Aggregation configuration
#[derive(Debug, Clone)]
pub struct AggregatorConfig {
    /// Minimum displacement (same units as x/y) counted as a movement event
    pub movement_threshold: f64,
}

impl Default for AggregatorConfig {
    fn default() -> Self {
        Self {
            movement_threshold: 0.01,
        }
    }
}

/// One summary statistic value for one landmark
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandmarkStat {
    pub landmark: Landmark,
    pub value: f64,
}

/// Summary statistics for one capture session, landmarks in baseline order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Identifying label, typically the source video file name
    pub label: String,
    pub standard_deviations: Vec<LandmarkStat>,
    pub magnitudes: Vec<LandmarkStat>,
    pub frequencies: Vec<LandmarkStat>,
}

impl SessionSummary {
    /// Landmarks covered by this summary, in baseline order
    pub fn landmarks(&self) -> impl Iterator<Item = Landmark> + '_ {
        self.standard_deviations.iter().map(|s| s.landmark)
    }
}

/// Per-session movement aggregator.
///
/// The first ingested snapshot fixes the baseline landmark set and order;
/// every later snapshot must carry exactly that set. Ingest is
/// frame-synchronous and single-threaded.
pub struct MovementAggregator {
    config: AggregatorConfig,
    session_id: SessionId,
    started_at: DateTime<Utc>,
    baseline: Vec<Landmark>,
    history: Vec<Snapshot>,
    movement_log: Vec<MovementRecord>,
    frequencies: HashMap<Landmark, u32>,
}

impl MovementAggregator {
    pub fn new() -> Self {
        Self::with_config(AggregatorConfig::default())
    }

    pub fn with_config(config: AggregatorConfig) -> Self {
        Self {
            config,
            session_id: SessionId::new(),
            started_at: Utc::now(),
            baseline: Vec::new(),
            history: Vec::new(),
            movement_log: Vec::new(),
            frequencies: HashMap::new(),
        }
    }

    pub fn session_id(&self) -> SessionId {
        self.session_id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Baseline landmark order, empty until the first frame is ingested
    pub fn baseline(&self) -> &[Landmark] {
        &self.baseline
    }

    pub fn history(&self) -> &[Snapshot] {
        &self.history
    }

    pub fn movement_log(&self) -> &[MovementRecord] {
        &self.movement_log
    }

    pub fn frame_count(&self) -> usize {
        self.history.len()
    }

    /// Transitions in which a landmark moved more than the threshold
    pub fn frequency_count(&self, landmark: Landmark) -> u32 {
        self.frequencies.get(&landmark).copied().unwrap_or(0)
    }

    /// Ingest one detector frame.
    ///
    /// Filters to the tracked landmarks, rounds coordinates, and appends
    /// to the history. From the second frame on, the frame is matched by
    /// name against the session baseline; a missing or extra tracked
    /// landmark fails the whole frame.
    pub fn ingest(&mut self, raw: &[RawKeypoint]) -> Result<()> {
        let snapshot = Snapshot::from_raw(raw);

        let ordered = if self.history.is_empty() {
            if snapshot.is_empty() {
                return Err(Error::SnapshotShape {
                    expected: Landmark::COUNT,
                    actual: 0,
                });
            }
            self.baseline = snapshot.landmarks();
            snapshot
        } else {
            self.align_to_baseline(snapshot)?
        };

        if let Some(previous) = self.history.last() {
            let record = MovementRecord::between(&ordered, previous)?;
            for entry in record.iter() {
                if entry.movement > self.config.movement_threshold {
                    *self.frequencies.entry(entry.landmark).or_insert(0) += 1;
                }
            }
            self.movement_log.push(record);
        }

        self.history.push(ordered);
        tracing::debug!(frames = self.history.len(), "snapshot ingested");
        Ok(())
    }

    /// Reorder a snapshot into baseline order, failing on set mismatch
    fn align_to_baseline(&self, snapshot: Snapshot) -> Result<Snapshot> {
        if snapshot.len() != self.baseline.len() {
            return Err(Error::SnapshotShape {
                expected: self.baseline.len(),
                actual: snapshot.len(),
            });
        }

        let keypoints = self
            .baseline
            .iter()
            .map(|&landmark| {
                snapshot
                    .get(landmark)
                    .copied()
                    .ok_or(Error::LandmarkMismatch { landmark })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Snapshot::from_keypoints(keypoints))
    }

    /// Population standard deviation of each landmark's movement series
    pub fn standard_deviations(&self) -> Result<Vec<LandmarkStat>> {
        self.require_movements()?;
        Ok(self
            .baseline
            .iter()
            .enumerate()
            .map(|(i, &landmark)| LandmarkStat {
                landmark,
                value: round_coord(population_std_dev(&self.movement_series(i))),
            })
            .collect())
    }

    /// Total path length traveled per landmark (not net displacement)
    pub fn magnitudes(&self) -> Result<Vec<LandmarkStat>> {
        self.require_movements()?;
        Ok(self
            .baseline
            .iter()
            .enumerate()
            .map(|(i, &landmark)| LandmarkStat {
                landmark,
                value: round_coord(self.movement_series(i).iter().sum()),
            })
            .collect())
    }

    /// Movement events per second over the supplied recording duration.
    ///
    /// The duration is the collaborator's actual elapsed recording time;
    /// it is never derived from the ingested data and has no default.
    pub fn frequencies(&self, duration_secs: f64) -> Result<Vec<LandmarkStat>> {
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Err(Error::InvalidDuration {
                value: duration_secs,
            });
        }
        self.require_movements()?;
        Ok(self
            .baseline
            .iter()
            .map(|&landmark| LandmarkStat {
                landmark,
                value: round_coord(f64::from(self.frequency_count(landmark)) / duration_secs),
            })
            .collect())
    }

    /// Full session summary: standard deviation, magnitude, and frequency
    /// per landmark in baseline order
    pub fn summary(&self, label: impl Into<String>, duration_secs: f64) -> Result<SessionSummary> {
        let summary = SessionSummary {
            label: label.into(),
            standard_deviations: self.standard_deviations()?,
            magnitudes: self.magnitudes()?,
            frequencies: self.frequencies(duration_secs)?,
        };
        tracing::debug!(
            session = %self.session_id,
            frames = self.history.len(),
            "session summarized"
        );
        Ok(summary)
    }

    /// One landmark's movement series across the whole log
    fn movement_series(&self, index: usize) -> Vec<f64> {
        self.movement_log
            .iter()
            .filter_map(|record| record.iter().nth(index).map(|m| m.movement))
            .collect()
    }

    /// Summaries need at least one frame transition
    fn require_movements(&self) -> Result<()> {
        if self.movement_log.is_empty() {
            return Err(Error::InsufficientData {
                required: 2,
                available: self.history.len(),
            });
        }
        Ok(())
    }
}

impl Default for MovementAggregator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(points: &[(&str, f64, f64)]) -> Vec<RawKeypoint> {
        points
            .iter()
            .map(|(name, x, y)| RawKeypoint::new(*name, *x, *y, Some(0.9)))
            .collect()
    }

    fn two_landmark_session() -> MovementAggregator {
        let mut agg = MovementAggregator::new();
        agg.ingest(&frame(&[("left_knee", 0.0, 0.0), ("right_knee", 10.0, 10.0)]))
            .unwrap();
        agg.ingest(&frame(&[("left_knee", 3.0, 4.0), ("right_knee", 10.0, 10.0)]))
            .unwrap();
        agg.ingest(&frame(&[("left_knee", 6.0, 8.0), ("right_knee", 10.0, 10.0)]))
            .unwrap();
        agg
    }

    #[test]
    fn test_movement_log_length() {
        let mut agg = MovementAggregator::new();
        assert_eq!(agg.movement_log().len(), 0);

        for i in 0..5 {
            agg.ingest(&frame(&[("left_knee", i as f64, 0.0)])).unwrap();
            // log length is always max(N - 1, 0)
            assert_eq!(agg.movement_log().len(), agg.frame_count() - 1);
        }
    }

    #[test]
    fn test_single_landmark_displacement() {
        let mut agg = MovementAggregator::new();
        agg.ingest(&frame(&[("left_knee", 0.0, 0.0)])).unwrap();
        agg.ingest(&frame(&[("left_knee", 3.0, 4.0)])).unwrap();

        let record = &agg.movement_log()[0];
        assert_eq!(record.get(Landmark::LeftKnee).unwrap().movement, 5.0);
        assert_eq!(agg.frequency_count(Landmark::LeftKnee), 1);
    }

    #[test]
    fn test_untracked_keypoints_ignored() {
        let mut agg = MovementAggregator::new();
        agg.ingest(&frame(&[("nose", 1.0, 1.0), ("left_knee", 0.0, 0.0)]))
            .unwrap();
        assert_eq!(agg.baseline(), &[Landmark::LeftKnee]);
        assert_eq!(agg.history()[0].len(), 1);
    }

    #[test]
    fn test_empty_first_frame_rejected() {
        let mut agg = MovementAggregator::new();
        let err = agg.ingest(&frame(&[("nose", 1.0, 1.0)])).unwrap_err();
        assert!(matches!(err, Error::SnapshotShape { actual: 0, .. }));
        assert_eq!(agg.frame_count(), 0);
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let mut agg = MovementAggregator::new();
        agg.ingest(&frame(&[("left_knee", 0.0, 0.0), ("right_knee", 1.0, 1.0)]))
            .unwrap();

        let err = agg.ingest(&frame(&[("left_knee", 1.0, 1.0)])).unwrap_err();
        assert!(matches!(
            err,
            Error::SnapshotShape {
                expected: 2,
                actual: 1
            }
        ));
        // failed frame leaves no partial state
        assert_eq!(agg.frame_count(), 1);
        assert_eq!(agg.movement_log().len(), 0);
    }

    #[test]
    fn test_landmark_set_mismatch_rejected() {
        let mut agg = MovementAggregator::new();
        agg.ingest(&frame(&[("left_knee", 0.0, 0.0)])).unwrap();

        let err = agg.ingest(&frame(&[("right_knee", 0.0, 0.0)])).unwrap_err();
        assert!(matches!(
            err,
            Error::LandmarkMismatch {
                landmark: Landmark::LeftKnee
            }
        ));
    }

    #[test]
    fn test_reordered_frame_accepted() {
        let mut agg = MovementAggregator::new();
        agg.ingest(&frame(&[("left_knee", 0.0, 0.0), ("right_knee", 10.0, 0.0)]))
            .unwrap();
        // detector emits the same landmarks in a different order
        agg.ingest(&frame(&[("right_knee", 10.0, 0.0), ("left_knee", 3.0, 4.0)]))
            .unwrap();

        let record = &agg.movement_log()[0];
        assert_eq!(record.get(Landmark::LeftKnee).unwrap().movement, 5.0);
        assert_eq!(record.get(Landmark::RightKnee).unwrap().movement, 0.0);
        // history is stored in baseline order
        assert_eq!(
            agg.history()[1].landmarks(),
            vec![Landmark::LeftKnee, Landmark::RightKnee]
        );
    }

    #[test]
    fn test_standard_deviation_constant_series() {
        let agg = two_landmark_session();
        let stats = agg.standard_deviations().unwrap();

        // left knee moved exactly 5.0 on both transitions
        assert_eq!(stats[0].landmark, Landmark::LeftKnee);
        assert_eq!(stats[0].value, 0.0);
        // right knee never moved
        assert_eq!(stats[1].landmark, Landmark::RightKnee);
        assert_eq!(stats[1].value, 0.0);
    }

    #[test]
    fn test_magnitude_is_path_length() {
        let agg = two_landmark_session();
        let stats = agg.magnitudes().unwrap();
        assert_eq!(stats[0].value, 10.0);
        assert_eq!(stats[1].value, 0.0);
    }

    #[test]
    fn test_frequency_rate() {
        let agg = two_landmark_session();
        let stats = agg.frequencies(4.0).unwrap();
        // two transitions above threshold over four seconds
        assert_eq!(stats[0].value, 0.5);
        assert_eq!(stats[1].value, 0.0);
    }

    #[test]
    fn test_frequency_never_exceeds_log_length() {
        let mut agg = MovementAggregator::new();
        for i in 0..20 {
            agg.ingest(&frame(&[("left_ankle", i as f64 * 0.5, 0.0)]))
                .unwrap();
        }
        assert!(
            (agg.frequency_count(Landmark::LeftAnkle) as usize) <= agg.movement_log().len()
        );
    }

    #[test]
    fn test_sub_threshold_movement_not_counted() {
        let mut agg = MovementAggregator::new();
        agg.ingest(&frame(&[("left_hip", 0.0, 0.0)])).unwrap();
        agg.ingest(&frame(&[("left_hip", 0.005, 0.0)])).unwrap();

        assert_eq!(agg.movement_log().len(), 1);
        assert_eq!(agg.frequency_count(Landmark::LeftHip), 0);
    }

    #[test]
    fn test_empty_history_summary_fails() {
        let agg = MovementAggregator::new();
        assert!(matches!(
            agg.standard_deviations(),
            Err(Error::InsufficientData {
                required: 2,
                available: 0
            })
        ));
        assert!(matches!(
            agg.summary("video", 10.0),
            Err(Error::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_single_frame_summary_fails() {
        let mut agg = MovementAggregator::new();
        agg.ingest(&frame(&[("left_knee", 0.0, 0.0)])).unwrap();
        assert!(matches!(
            agg.magnitudes(),
            Err(Error::InsufficientData {
                required: 2,
                available: 1
            })
        ));
    }

    #[test]
    fn test_invalid_duration() {
        let agg = two_landmark_session();
        assert!(matches!(
            agg.frequencies(0.0),
            Err(Error::InvalidDuration { .. })
        ));
        assert!(matches!(
            agg.frequencies(-5.0),
            Err(Error::InvalidDuration { .. })
        ));
        assert!(matches!(
            agg.frequencies(f64::NAN),
            Err(Error::InvalidDuration { .. })
        ));
    }

    #[test]
    fn test_summary_interleave_order() {
        let agg = two_landmark_session();
        let summary = agg.summary("session_a", 2.0).unwrap();

        assert_eq!(summary.label, "session_a");
        assert_eq!(
            summary.landmarks().collect::<Vec<_>>(),
            vec![Landmark::LeftKnee, Landmark::RightKnee]
        );
        assert_eq!(summary.magnitudes[0].value, 10.0);
        assert_eq!(summary.frequencies[0].value, 1.0);
    }

    #[test]
    fn test_custom_threshold() {
        let mut agg = MovementAggregator::with_config(AggregatorConfig {
            movement_threshold: 6.0,
        });
        agg.ingest(&frame(&[("left_knee", 0.0, 0.0)])).unwrap();
        agg.ingest(&frame(&[("left_knee", 3.0, 4.0)])).unwrap();

        // 5.0 displacement stays below the raised threshold
        assert_eq!(agg.frequency_count(Landmark::LeftKnee), 0);
    }
}
