//! Core library for video metadata inspection using ffprobe.
//!
//! This crate shells out to ffprobe, parses its JSON document, and extracts
//! a small set of scalar fields describing the container and its first video
//! stream.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! let info = vidprobe_core::media_info(Path::new("/path/to/video.mp4")).unwrap();
//! println!("{}x{} @ {:.2} fps", info.width, info.height, info.fps);
//! ```

pub mod error;
pub mod external;
pub mod media;
pub mod utils;

// Re-exports for public API
pub use error::{CoreError, CoreResult};
pub use external::{FfprobeOutput, FormatInfo, StreamInfo, check_dependency, run_ffprobe};
pub use media::{MediaInfo, media_info};
pub use utils::{format_bitrate, format_file_size};
