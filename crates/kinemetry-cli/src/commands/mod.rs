//! CLI subcommand implementations.

pub mod info;
pub mod keypoints;
pub mod stats;
pub mod table;

use std::path::Path;

use anyhow::Context;

use kinemetry_core::{AggregatorConfig, MovementAggregator};

use crate::frames;

/// Ingest a whole frame dump into a fresh aggregator
pub(crate) fn ingest_session(
    path: &Path,
    threshold: Option<f64>,
) -> anyhow::Result<MovementAggregator> {
    let frames = frames::read_frames(path)?;

    let config = match threshold {
        Some(movement_threshold) => AggregatorConfig { movement_threshold },
        None => AggregatorConfig::default(),
    };

    let mut aggregator = MovementAggregator::with_config(config);
    for (i, frame) in frames.iter().enumerate() {
        aggregator
            .ingest(frame)
            .with_context(|| format!("Failed to ingest frame {}", i + 1))?;
    }
    Ok(aggregator)
}
