use log::info;
use vidprobe_core::{
    CoreError, CoreResult, check_dependency, format_bitrate, format_file_size, media_info,
};

use crate::cli::InfoArgs;
use crate::output::{print_heading, print_info};

/// Execute the info command: probe the input file and print its metadata.
///
/// The input file and the ffprobe binary are both checked up front so that
/// "file not found" and "tool missing" fail with their own error kinds
/// instead of surfacing as a probe failure.
pub fn run_info(args: InfoArgs) -> CoreResult<()> {
    let input_file = args.input_file;

    if !input_file.is_file() {
        return Err(CoreError::InputNotFound(input_file));
    }

    info!("Checking ffprobe availability");
    check_dependency("ffprobe")?;

    info!("Probing {}", input_file.display());
    let media = media_info(&input_file)?;

    print_heading("Media Information");
    print_info("Duration", format!("{:.2} s", media.duration_secs));
    print_info("Bitrate", format_bitrate(media.bitrate_bps));
    print_info("Frame rate", format!("{:.2}", media.fps));
    print_info("Resolution", format!("{}x{}", media.width, media.height));
    print_info("File size", format_file_size(media.file_size_bytes));

    Ok(())
}
