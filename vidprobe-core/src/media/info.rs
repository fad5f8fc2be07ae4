//! Extraction of scalar metadata from a parsed ffprobe document.

use std::path::Path;

use crate::error::{CoreError, CoreResult};
use crate::external::ffprobe::{FfprobeOutput, run_ffprobe};

/// Technical metadata for a single video file.
///
/// Container-level fields come from ffprobe's format section; `fps`, `width`,
/// and `height` come from the first video stream in the container. The value
/// is immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaInfo {
    /// Total container duration in seconds
    pub duration_secs: f64,
    /// Overall bitrate in bits per second, when ffprobe reports one
    pub bitrate_bps: Option<u64>,
    /// Frame rate of the first video stream
    pub fps: f64,
    /// Width of the first video stream in pixels
    pub width: u32,
    /// Height of the first video stream in pixels
    pub height: u32,
    /// Container file size in bytes as reported by ffprobe
    pub file_size_bytes: u64,
}

impl MediaInfo {
    /// Extracts metadata from a parsed ffprobe document.
    ///
    /// `format.duration` and `format.size` are required and missing values
    /// surface as `CoreError::MissingField` rather than defaulting to zero.
    /// An absent or empty `bit_rate` is recorded as `None`. The first stream
    /// with codec type "video" supplies the frame rate and dimensions; if the
    /// container has no such stream this fails with
    /// `CoreError::NoVideoStream` and no partial result is produced.
    pub fn from_probe(probe: &FfprobeOutput, input_path: &Path) -> CoreResult<Self> {
        let duration_secs = probe
            .format
            .duration
            .as_deref()
            .ok_or(CoreError::MissingField("format.duration"))?
            .parse::<f64>()
            .map_err(|e| CoreError::FfprobeParse(format!("duration: {e}")))?;

        let bitrate_bps = match probe.format.bit_rate.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(
                raw.parse::<u64>()
                    .map_err(|e| CoreError::FfprobeParse(format!("bit_rate '{raw}': {e}")))?,
            ),
        };

        let file_size_bytes = probe
            .format
            .size
            .as_deref()
            .ok_or(CoreError::MissingField("format.size"))?
            .parse::<u64>()
            .map_err(|e| CoreError::FfprobeParse(format!("size: {e}")))?;

        let video_stream = probe
            .streams
            .iter()
            .inspect(|s| log::debug!("Scanning stream: {s:?}"))
            .find(|s| s.codec_type.as_deref() == Some("video"))
            .ok_or_else(|| CoreError::NoVideoStream(input_path.to_path_buf()))?;

        // ffprobe omits r_frame_rate for some attached-picture streams
        let fps = parse_frame_rate(video_stream.r_frame_rate.as_deref().unwrap_or("0/1"))?;

        let width = video_stream
            .width
            .ok_or(CoreError::MissingField("stream.width"))?;
        let height = video_stream
            .height
            .ok_or(CoreError::MissingField("stream.height"))?;

        Ok(MediaInfo {
            duration_secs,
            bitrate_bps,
            fps,
            width,
            height,
            file_size_bytes,
        })
    }
}

/// Probes the given file with ffprobe and extracts its metadata.
pub fn media_info(input_path: &Path) -> CoreResult<MediaInfo> {
    let probe = run_ffprobe(input_path)?;
    MediaInfo::from_probe(&probe, input_path)
}

/// Parses a rational frame-rate expression such as "30000/1001".
///
/// A zero denominator yields 0.0; the division is not attempted.
fn parse_frame_rate(raw: &str) -> CoreResult<f64> {
    let (num, den) = raw.split_once('/').ok_or_else(|| {
        CoreError::FfprobeParse(format!("frame rate '{raw}': expected <num>/<den>"))
    })?;

    let num = num
        .parse::<f64>()
        .map_err(|e| CoreError::FfprobeParse(format!("frame rate '{raw}': {e}")))?;
    let den = den
        .parse::<f64>()
        .map_err(|e| CoreError::FfprobeParse(format!("frame rate '{raw}': {e}")))?;

    if den == 0.0 { Ok(0.0) } else { Ok(num / den) }
}
