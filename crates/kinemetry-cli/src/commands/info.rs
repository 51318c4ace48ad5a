//! Show frame and landmark counts for a detector dump.

use std::path::PathBuf;

use kinemetry_core::Snapshot;

use crate::frames;

pub fn run(path: PathBuf) -> anyhow::Result<()> {
    let frames = frames::read_frames(&path)?;

    println!("Dump: {}", path.display());
    println!("  Frames: {}", frames.len());

    let total_keypoints: usize = frames.iter().map(|f| f.len()).sum();
    println!("  Raw keypoints: {}", total_keypoints);

    if let Some(first) = frames.first() {
        let snapshot = Snapshot::from_raw(first);
        println!("  Tracked landmarks in first frame: {}", snapshot.len());
        for kp in snapshot.iter() {
            println!(
                "    {} ({}, {})",
                kp.landmark, kp.position.x, kp.position.y
            );
        }
    }

    Ok(())
}
