//! Frame-to-frame movement records and descriptive statistics.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::geometry::round_coord;
use crate::snapshot::Snapshot;
use crate::types::Landmark;

/// Displacement of one landmark between two consecutive snapshots
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandmarkMovement {
    pub landmark: Landmark,
    /// Euclidean displacement, rounded to session precision
    pub movement: f64,
}

/// Per-landmark displacements for one frame transition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovementRecord {
    movements: Vec<LandmarkMovement>,
}

impl MovementRecord {
    /// Compute displacements between two snapshots, matched by landmark.
    ///
    /// Ordering follows `previous`. A landmark present in `previous` but
    /// absent from `current` is an error; the aggregator guarantees both
    /// snapshots carry the session baseline set before calling this.
    pub fn between(current: &Snapshot, previous: &Snapshot) -> Result<Self> {
        if current.len() != previous.len() {
            return Err(Error::SnapshotShape {
                expected: previous.len(),
                actual: current.len(),
            });
        }

        let movements = previous
            .iter()
            .map(|prev| {
                let curr = current
                    .get(prev.landmark)
                    .ok_or(Error::LandmarkMismatch {
                        landmark: prev.landmark,
                    })?;
                Ok(LandmarkMovement {
                    landmark: prev.landmark,
                    movement: round_coord(curr.position.distance_to(&prev.position)),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { movements })
    }

    pub fn len(&self) -> usize {
        self.movements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movements.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &LandmarkMovement> {
        self.movements.iter()
    }

    pub fn get(&self, landmark: Landmark) -> Option<&LandmarkMovement> {
        self.movements.iter().find(|m| m.landmark == landmark)
    }
}

/// Arithmetic mean; 0 for an empty series
pub(crate) fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation; 0 for an empty series
pub(crate) fn population_std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}
