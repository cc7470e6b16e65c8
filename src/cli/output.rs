//! Colored status lines for the terminal.
//!
//! Errors and warnings go to stderr so they never mix with markup on
//! stdout. Color suppression (NO_COLOR, CLICOLOR) is handled by the
//! colored crate.

use colored::Colorize;

/// Error line with a red bold prefix, on stderr.
pub fn error(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

/// Warning line with a yellow prefix, on stderr.
pub fn warning(msg: &(impl std::fmt::Display + ?Sized)) {
    eprintln!("{}: {}", "Warning".yellow(), msg);
}

/// Confirmation line with a green checkmark, on stdout.
pub fn success(msg: &(impl std::fmt::Display + ?Sized)) {
    println!("{} {}", "✓".green(), msg);
}
