//! Summarize one capture session into a stats CSV.

use std::path::PathBuf;

use anyhow::Context;

use kinemetry_export::{naming, summary_csv};

pub fn run(
    frames: PathBuf,
    duration_secs: f64,
    video_name: String,
    threshold: Option<f64>,
    output: PathBuf,
) -> anyhow::Result<()> {
    let aggregator = super::ingest_session(&frames, threshold)?;
    let summary = aggregator.summary(video_name.as_str(), duration_secs)?;

    let path = output.join(naming::stats_csv_name(&video_name));
    std::fs::write(&path, summary_csv(&summary))
        .with_context(|| format!("Failed to write {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        frames = aggregator.frame_count(),
        "session summary written"
    );
    println!(
        "Wrote {} ({} frames, {} transitions)",
        path.display(),
        aggregator.frame_count(),
        aggregator.movement_log().len()
    );
    Ok(())
}
