//! CSV assembly for keypoint dumps and session summaries.
//!
//! Two formats:
//! 1. Raw dump — header `name,x,y`, one row per keypoint per frame,
//!    frames concatenated in ingest order.
//! 2. Summary — a `videoFileName` column followed by a
//!    standard-deviation / magnitude / frequency column triplet per
//!    landmark, one value row per session.

use kinemetry_core::{SessionSummary, Snapshot};

/// Header of the raw per-frame keypoint dump
pub const KEYPOINTS_HEADER: &str = "name,x,y";

/// Label column of the summary formats
pub const SUMMARY_LABEL_COLUMN: &str = "videoFileName";

/// Assemble the raw per-frame keypoint dump for a snapshot history
pub fn keypoints_csv(history: &[Snapshot]) -> String {
    let mut rows = vec![KEYPOINTS_HEADER.to_string()];
    for snapshot in history {
        for kp in snapshot.iter() {
            rows.push(format!("{},{},{}", kp.landmark, kp.position.x, kp.position.y));
        }
    }
    rows.join("\n")
}

/// Header row matching a summary's landmark set, in baseline order
pub fn summary_header(summary: &SessionSummary) -> String {
    let mut columns = vec![SUMMARY_LABEL_COLUMN.to_string()];
    for landmark in summary.landmarks() {
        columns.push(format!("{landmark}_standard_deviation"));
        columns.push(format!("{landmark}_magnitude_of_movement"));
        columns.push(format!("{landmark}_frequency"));
    }
    columns.join(",")
}

/// Value row with the three statistics interleaved per landmark
pub fn summary_row(summary: &SessionSummary) -> String {
    let mut values = vec![summary.label.clone()];
    for i in 0..summary.standard_deviations.len() {
        values.push(summary.standard_deviations[i].value.to_string());
        values.push(summary.magnitudes[i].value.to_string());
        values.push(summary.frequencies[i].value.to_string());
    }
    values.join(",")
}

/// Complete fresh-file summary document: header plus one value row
pub fn summary_csv(summary: &SessionSummary) -> String {
    format!("{}\n{}", summary_header(summary), summary_row(summary))
}
