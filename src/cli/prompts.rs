//! Centralized warning and prompt messages for CLI output.

use std::io::Write;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(quiet: bool, msg: &str) {
    if !quiet {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - never suppressed
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

fn is_interactive() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// Prompt user when clipboard is unavailable. Returns true to fall back to the terminal.
/// Quiet or non-interactive sessions fall back without asking.
pub fn clipboard_fallback_prompt(quiet: bool) -> bool {
    if quiet || !is_interactive() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_err() {
        return true;
    }
    let input = input.trim().to_lowercase();
    if input.is_empty() || input == "y" || input == "yes" {
        eprintln!();
        return true;
    }

    eprintln!("\nAborted.");
    false
}

pub fn clipboard_copied(quiet: bool, count: usize) {
    if !quiet {
        println!("*** {count} password(s) copied to clipboard ***");
    }
}

/// Clipboard errors are always shown.
pub fn clipboard_error(err: &str) {
    error(&format!("Clipboard error: {err}"));
}
