//! Terminal status output
//!
//! Status lines go to stderr so that stdout carries only the rendered ticket.

use colored::Colorize;

/// Print a `> label: value` status line
pub fn status(label: &str, value: &str) {
    eprintln!("{} {}: {}", ">".bright_green(), label, value.bright_cyan());
}

/// Print a warning that does not stop the run
pub fn warn(message: &str) {
    eprintln!("{} {}", "!".bright_yellow(), message);
}

/// Print an error line
pub fn error(message: &str) {
    eprintln!("{} {}", "x".bright_red(), message.red());
}
