//! Interactions with the external ffprobe tool.
//!
//! This module encapsulates everything that touches the ffprobe process:
//! checking that the tool is installed, spawning it against an input file,
//! and deserializing the JSON document it emits.

// ---- Internal crate imports ----
use crate::error::{CoreError, CoreResult, command_start_error};

// ---- Standard library imports ----
use std::io;
use std::process::{Command, Stdio};

/// Contains ffprobe process execution and the JSON document model
pub mod ffprobe;

pub use ffprobe::{FfprobeOutput, FormatInfo, StreamInfo, run_ffprobe};

/// Checks if a required external command is available and executable.
///
/// Runs the command with a `-version` argument and discards its output; only
/// the ability to start it matters. A missing binary maps to
/// `CoreError::DependencyNotFound`, which keeps "tool not installed" distinct
/// from probe failures on a real file.
pub fn check_dependency(cmd_name: &str) -> CoreResult<()> {
    let version_arg = "-version";

    let direct_result = Command::new(cmd_name)
        .arg(version_arg)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();

    match direct_result {
        Ok(_) => {
            log::debug!("Found dependency: {}", cmd_name);
            Ok(())
        }
        Err(e) => {
            if e.kind() == io::ErrorKind::NotFound {
                log::warn!("Dependency '{}' not found.", cmd_name);
                Err(CoreError::DependencyNotFound(cmd_name.to_string()))
            } else {
                log::error!(
                    "Failed to start dependency check command '{}': {}",
                    cmd_name,
                    e
                );
                Err(command_start_error(cmd_name, e))
            }
        }
    }
}
