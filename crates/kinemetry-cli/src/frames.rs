//! JSON Lines frame reader for detector dumps.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::Context;

use kinemetry_core::RawKeypoint;

/// Read a detector dump: one JSON array of keypoints per line.
///
/// Blank lines are skipped; anything else must parse as a frame.
pub fn read_frames(path: &Path) -> anyhow::Result<Vec<Vec<RawKeypoint>>> {
    let file =
        File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let reader = BufReader::new(file);

    let mut frames = Vec::new();
    for (lineno, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("Failed to read {}", path.display()))?;
        if line.trim().is_empty() {
            continue;
        }

        let frame: Vec<RawKeypoint> = serde_json::from_str(&line)
            .with_context(|| format!("Malformed frame at {}:{}", path.display(), lineno + 1))?;
        frames.push(frame);
    }

    tracing::debug!(path = %path.display(), frames = frames.len(), "frame dump loaded");
    Ok(frames)
}
