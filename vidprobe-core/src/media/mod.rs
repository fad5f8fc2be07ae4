//! Media metadata types and extraction.

/// Module containing the `MediaInfo` type and the extraction logic that
/// derives it from a parsed ffprobe document.
pub mod info;

pub use info::{MediaInfo, media_info};
