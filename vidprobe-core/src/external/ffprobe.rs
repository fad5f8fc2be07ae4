//! ffprobe process execution and JSON document model.
//!
//! ffprobe is invoked with error-level logging, JSON output, and both the
//! container-format section and the per-stream list. Numeric container
//! fields arrive as strings and are parsed downstream.

use crate::error::{CoreError, CoreResult, command_failed_error, command_start_error};
use serde::Deserialize;
use std::path::Path;
use std::process::Command;

/// Top-level ffprobe JSON document.
#[derive(Debug, Clone, Deserialize)]
pub struct FfprobeOutput {
    #[serde(default)]
    pub streams: Vec<StreamInfo>,
    #[serde(default)]
    pub format: FormatInfo,
}

/// Container-level metadata.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormatInfo {
    pub duration: Option<String>,
    pub bit_rate: Option<String>,
    pub size: Option<String>,
}

/// One elementary stream within the container. Every field is optional so
/// audio and subtitle entries deserialize without video-only fields.
#[derive(Debug, Clone, Deserialize)]
pub struct StreamInfo {
    pub codec_type: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub r_frame_rate: Option<String>,
}

/// Executes ffprobe on the given file and returns the parsed JSON document.
///
/// Blocks until ffprobe exits; there is no timeout and no retry. A missing
/// or unreadable input file surfaces through ffprobe's non-zero exit status.
pub fn run_ffprobe(input_path: &Path) -> CoreResult<FfprobeOutput> {
    log::debug!("Running ffprobe on: {}", input_path.display());

    let mut cmd = Command::new("ffprobe");
    cmd.args([
        "-v",
        "error",
        "-print_format",
        "json",
        "-show_format",
        "-show_streams",
    ])
    .arg(input_path);

    let output = cmd.output().map_err(|e| command_start_error("ffprobe", e))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
        return Err(command_failed_error("ffprobe", output.status, stderr));
    }

    serde_json::from_slice(&output.stdout).map_err(|e| {
        CoreError::JsonParse(format!(
            "ffprobe output for {}: {}",
            input_path.display(),
            e
        ))
    })
}
