//! Output formatting utilities for the CLI.

pub mod table;

use serde::Serialize;

/// Dual-format output for a command result.
pub trait CommandOutput: Serialize {
    /// Render the result for a human reader.
    fn to_human(&self) -> String;
    /// Render the result as a JSON value.
    fn to_json(&self) -> serde_json::Value;
}

/// Print a command result in the selected format.
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!(
            "{}",
            serde_json::to_string_pretty(&result.to_json()).unwrap_or_default()
        );
    } else {
        println!("{}", result.to_human());
    }
}

/// Truncate a string to a maximum length in bytes, appending "..." if
/// truncated. The cut backs off to a char boundary so multibyte text never
/// splits mid-character.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    let mut end = max_len.saturating_sub(3);
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &s[..end])
}
