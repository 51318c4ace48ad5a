//! Multi-session summary table maintenance.
//!
//! The table lives in a JSON sidecar file between runs: `append` adds one
//! session's summary row, `flush` writes the accumulated CSV and clears
//! the sidecar.

use std::path::{Path, PathBuf};

use anyhow::Context;

use kinemetry_export::SessionTable;

pub fn append(
    frames: PathBuf,
    duration_secs: f64,
    video_name: String,
    threshold: Option<f64>,
    table_path: PathBuf,
) -> anyhow::Result<()> {
    let aggregator = super::ingest_session(&frames, threshold)?;
    let summary = aggregator.summary(video_name.as_str(), duration_secs)?;

    let mut table = load(&table_path)?;
    table.append(&summary)?;
    save(&table_path, &table)?;

    println!(
        "Appended {} to {} ({} sessions)",
        video_name,
        table_path.display(),
        table.len()
    );
    Ok(())
}

pub fn flush(table_path: PathBuf, output: PathBuf) -> anyhow::Result<()> {
    let mut table = load(&table_path)?;
    let csv = table.serialize_and_clear()?;

    std::fs::write(&output, csv)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    save(&table_path, &table)?;

    println!("Wrote {}", output.display());
    Ok(())
}

fn load(path: &Path) -> anyhow::Result<SessionTable> {
    if !path.exists() {
        return Ok(SessionTable::new());
    }
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&data).with_context(|| format!("Malformed table {}", path.display()))
}

fn save(path: &Path, table: &SessionTable) -> anyhow::Result<()> {
    let data = serde_json::to_string_pretty(table)?;
    std::fs::write(path, data).with_context(|| format!("Failed to write {}", path.display()))
}
