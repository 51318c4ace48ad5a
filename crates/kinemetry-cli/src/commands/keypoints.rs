//! Dump the filtered per-frame keypoints as CSV (and optionally JSON).

use std::path::PathBuf;

use anyhow::Context;

use kinemetry_export::{keypoints_csv, naming, KeypointDump};

pub fn run(
    frames: PathBuf,
    video_name: String,
    json: bool,
    output: PathBuf,
) -> anyhow::Result<()> {
    let aggregator = super::ingest_session(&frames, None)?;

    let csv_path = output.join(naming::keypoints_csv_name(&video_name));
    std::fs::write(&csv_path, keypoints_csv(aggregator.history()))
        .with_context(|| format!("Failed to write {}", csv_path.display()))?;
    println!(
        "Wrote {} ({} frames)",
        csv_path.display(),
        aggregator.frame_count()
    );

    if json {
        let dump = KeypointDump::new(&aggregator, video_name.as_str());
        let json_path = output.join(naming::keypoints_json_name(&video_name));
        std::fs::write(&json_path, dump.to_json()?)
            .with_context(|| format!("Failed to write {}", json_path.display()))?;
        println!("Wrote {}", json_path.display());
    }

    Ok(())
}
