use assert_cmd::Command;
use predicates::str::contains;
use std::error::Error;
use tempfile::tempdir;

// Helper function to get the path to the compiled binary
fn vidprobe_cmd() -> Command {
    Command::cargo_bin("vidprobe").expect("Failed to find vidprobe binary")
}

#[test]
fn test_info_non_existent_input() -> Result<(), Box<dyn Error>> {
    let mut cmd = vidprobe_cmd();
    cmd.arg("info").arg("surely/this/does/not/exist/input.mp4");

    // Expect failure from the up-front existence check, before ffprobe
    // is ever invoked.
    cmd.assert()
        .failure()
        .stderr(contains("Input file not found"));

    Ok(())
}

#[test]
fn test_info_rejects_directory_input() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;

    let mut cmd = vidprobe_cmd();
    cmd.arg("info").arg(dir.path());

    cmd.assert()
        .failure()
        .stderr(contains("Input file not found"));

    Ok(())
}

#[test]
fn test_info_requires_input_argument() -> Result<(), Box<dyn Error>> {
    let mut cmd = vidprobe_cmd();
    cmd.arg("info");

    cmd.assert().failure();

    Ok(())
}

#[test]
fn test_help_lists_info_command() -> Result<(), Box<dyn Error>> {
    let mut cmd = vidprobe_cmd();
    cmd.arg("--help");

    cmd.assert().success().stdout(contains("info"));

    Ok(())
}
