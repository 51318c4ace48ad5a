//! Kinemetry CLI — movement statistics from pose-detector keypoint dumps.
//!
//! Usage:
//!   kinemetry stats <FRAMES> --duration-secs 12.5 --video-name clip01
//!   kinemetry keypoints <FRAMES> --video-name clip01 [--json]
//!   kinemetry table append <FRAMES> --duration-secs 12.5 --video-name clip01
//!   kinemetry table flush
//!   kinemetry info <FRAMES>
//!
//! Frame dumps are JSON Lines: one detector frame per line, each an array
//! of `{"name", "x", "y", "score"}` keypoint objects.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;
mod frames;

#[derive(Parser)]
#[command(
    name = "kinemetry",
    about = "Movement statistics from pose keypoint streams",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Summarize one capture session into a stats CSV
    Stats {
        /// Path to the detector frame dump (JSON Lines)
        frames: PathBuf,

        /// Elapsed recording time of the session, in seconds
        #[arg(long)]
        duration_secs: f64,

        /// Source video file name, used for labeling and output naming
        #[arg(long)]
        video_name: String,

        /// Movement-event threshold override
        #[arg(long)]
        threshold: Option<f64>,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Dump the filtered per-frame keypoints as CSV
    Keypoints {
        /// Path to the detector frame dump (JSON Lines)
        frames: PathBuf,

        /// Source video file name, used for output naming
        #[arg(long)]
        video_name: String,

        /// Also write the keypoint history as JSON
        #[arg(long)]
        json: bool,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Maintain a multi-session summary table
    Table {
        #[command(subcommand)]
        command: TableCommands,
    },

    /// Show frame and landmark counts for a dump
    Info {
        /// Path to the detector frame dump (JSON Lines)
        frames: PathBuf,
    },
}

#[derive(Subcommand)]
enum TableCommands {
    /// Summarize a session and append it to the table
    Append {
        /// Path to the detector frame dump (JSON Lines)
        frames: PathBuf,

        /// Elapsed recording time of the session, in seconds
        #[arg(long)]
        duration_secs: f64,

        /// Source video file name, used as the row label
        #[arg(long)]
        video_name: String,

        /// Movement-event threshold override
        #[arg(long)]
        threshold: Option<f64>,

        /// Table sidecar file
        #[arg(long, default_value = "kinemetry-table.json")]
        table: PathBuf,
    },

    /// Write the accumulated table as CSV and clear it
    Flush {
        /// Table sidecar file
        #[arg(long, default_value = "kinemetry-table.json")]
        table: PathBuf,

        /// Output CSV path
        #[arg(short, long, default_value = "_stats.csv")]
        output: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Stats {
            frames,
            duration_secs,
            video_name,
            threshold,
            output,
        } => commands::stats::run(frames, duration_secs, video_name, threshold, output),
        Commands::Keypoints {
            frames,
            video_name,
            json,
            output,
        } => commands::keypoints::run(frames, video_name, json, output),
        Commands::Table { command } => match command {
            TableCommands::Append {
                frames,
                duration_secs,
                video_name,
                threshold,
                table,
            } => commands::table::append(frames, duration_secs, video_name, threshold, table),
            TableCommands::Flush { table, output } => commands::table::flush(table, output),
        },
        Commands::Info { frames } => commands::info::run(frames),
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}
