//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Module containing the implementation of the `info` command.
/// This command prints technical metadata for a single video file.
pub mod info;
