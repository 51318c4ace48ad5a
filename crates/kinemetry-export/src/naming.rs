//! Output-file naming derived from the source video file name.

/// Name of the raw per-frame keypoint CSV dump
pub fn keypoints_csv_name(video_name: &str) -> String {
    format!("{video_name}keypoints.csv")
}

/// Name of the keypoint history JSON dump
pub fn keypoints_json_name(video_name: &str) -> String {
    format!("{video_name}keypoints.json")
}

/// Name of the per-session (or flushed multi-session) stats CSV
pub fn stats_csv_name(video_name: &str) -> String {
    format!("{video_name}_stats.csv")
}
