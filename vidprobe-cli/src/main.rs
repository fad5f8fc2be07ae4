// vidprobe-cli/src/main.rs
//
// Binary entry point for the Vidprobe CLI.
//
// Responsibilities include:
// - Parsing command-line arguments.
// - Initializing logging based on the --verbose flag.
// - Dispatching to the selected command.
// - Managing the process exit code based on success or failure.

use clap::Parser;
use std::process;

use vidprobe_cli::cli::{Cli, Commands};
use vidprobe_cli::commands::info::run_info;
use vidprobe_cli::output::print_error;

fn main() {
    let cli = Cli::parse();

    // RUST_LOG still wins when set; --verbose only raises the default level.
    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let result = match cli.command {
        Commands::Info(args) => run_info(args),
    };

    if let Err(e) = result {
        print_error(&e.to_string());
        process::exit(1);
    }
}
