use std::fmt::Display;

use owo_colors::OwoColorize;

/// Print a heading with colored styling and clear separation
pub fn print_heading(text: &str) {
    let line = "=".repeat(50);

    println!("\n{}", line.bright_blue());
    println!("{}", format!(" {} ", text).bold().bright_white());
    println!("{}\n", line.bright_blue());
}

/// Print an info line with label and value, with the label colored
pub fn print_info<T: Display>(label: &str, value: T) {
    println!("{}: {}", label.bright_cyan(), value);
}

/// Print an error message to stderr with a red prefix
pub fn print_error(message: &str) {
    eprintln!("{} {}", "Error:".bright_red().bold(), message);
}
