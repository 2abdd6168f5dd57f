//! Raw ANSI escape helpers.
//!
//! Unlike `colored::Colorize`, these never consult the terminal or `NO_COLOR`:
//! log lines and banners always carry their codes.

use colored::Color;

pub const RESET: &str = "\x1b[0m";

/// Wraps `text` in the foreground code for `color`, closed by a full reset.
pub fn paint(text: impl AsRef<str>, color: Color) -> String {
    format!("\x1b[{}m{}{RESET}", color.to_fg_str(), text.as_ref())
}

pub fn bold(text: impl AsRef<str>) -> String {
    format!("\x1b[1m{}\x1b[22m", text.as_ref())
}

pub fn underline(text: impl AsRef<str>) -> String {
    format!("\x1b[4m{}\x1b[24m", text.as_ref())
}

/// Removes CSI sequences, leaving only the visible text.
pub fn strip(text: &str) -> String {
    let mut plain = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(ch) = chars.next() {
        if ch == '\x1b' {
            // Skip "[", parameters, and the final letter.
            for inner in chars.by_ref() {
                if inner.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            plain.push(ch);
        }
    }
    plain
}
