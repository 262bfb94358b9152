// src/exec/filters.rs

//! Line filters applied between the pipe readers and the caller.

use crate::types::{OutputLine, StreamTag};

/// Replacement text for any line that mentions a passphrase. The signing
/// passphrase is embedded in the debuild command line, so anything echoing
/// that command back must not reach logs verbatim.
pub const REDACTED: &str = "PASSPHRASE NOT HERE";

// ANSI markers; same palette as the tooling this replaces.
pub const RED: &str = "\x1b[1;31m";
pub const BLUE: &str = "\x1b[1;34m";
pub const RESET: &str = "\x1b[0;0m";

/// Apply the filter chain to one line: redaction first, then colorization
/// of stderr lines when enabled. Stdout lines are never colorized.
pub fn apply(mut line: OutputLine, colorize_errors: bool) -> OutputLine {
    if line.text().contains("passphrase") {
        line.set_text(REDACTED);
    }
    if colorize_errors && line.tag() == StreamTag::Err {
        let colored = format!("{RED}{}{RESET}", line.text());
        line.set_text(colored);
    }
    line
}

/// Redact a free-standing piece of text. Used for the echoed command line,
/// which is written before the process even spawns.
pub fn redact_text(text: &str) -> &str {
    if text.contains("passphrase") {
        REDACTED
    } else {
        text
    }
}
