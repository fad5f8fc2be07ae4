// vidprobe-cli/src/cli.rs
//
// Defines the command-line argument structures using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

// --- CLI Argument Definition ---

#[derive(Parser, Debug)]
#[command(
    author,
    version, // Reads from Cargo.toml via "cargo" feature in clap
    about = "Vidprobe: Video metadata inspection tool",
    long_about = "Extracts duration, bitrate, frame rate, resolution, and file size \
                  from a video file using ffprobe via the vidprobe-core library."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Prints technical metadata for a single video file
    Info(InfoArgs),
    // Add other subcommands here later
}

#[derive(Parser, Debug)]
pub struct InfoArgs {
    /// Path to the video file to inspect
    #[arg(required = true, value_name = "INPUT_FILE")]
    pub input_file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_info_basic_args() {
        let cli = Cli::parse_from(["vidprobe", "info", "movie.mp4"]);

        assert!(!cli.verbose);
        match cli.command {
            Commands::Info(args) => {
                assert_eq!(args.input_file, PathBuf::from("movie.mp4"));
            }
        }
    }

    #[test]
    fn test_parse_verbose_flag() {
        let cli = Cli::parse_from(["vidprobe", "info", "movie.mp4", "--verbose"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_missing_input_file_is_rejected() {
        assert!(Cli::try_parse_from(["vidprobe", "info"]).is_err());
    }
}
