// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal colors for help text and command output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers
    pub const HEADER: u8 = 74;
    /// Commands and literals
    pub const LITERAL: u8 = 250;
    /// Placeholders, defaults and hints
    pub const CONTEXT: u8 = 245;
    /// Rule violations
    pub const WARNING: u8 = 179;
    /// Successful submissions
    pub const SUCCESS: u8 = 108;
}

const RESET: &str = "\x1b[0m";

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if crate::env::no_color() {
        return false;
    }
    if crate::env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Wrap `text` in a 256-color foreground sequence.
pub fn paint(code: u8, text: &str) -> String {
    format!("\x1b[38;5;{code}m{text}{RESET}")
}

fn paint_if(code: u8, text: &str) -> String {
    if should_colorize() {
        paint(code, text)
    } else {
        text.to_string()
    }
}

pub fn header(text: &str) -> String {
    paint_if(codes::HEADER, text)
}

pub fn literal(text: &str) -> String {
    paint_if(codes::LITERAL, text)
}

pub fn context(text: &str) -> String {
    paint_if(codes::CONTEXT, text)
}

pub fn warning(text: &str) -> String {
    paint_if(codes::WARNING, text)
}

pub fn success(text: &str) -> String {
    paint_if(codes::SUCCESS, text)
}

/// Colorize an examples help block.
///
/// Lines ending in `:` are headers. Other indented lines are split at the
/// first run of two spaces into a command and its description; quoted
/// arguments and `<placeholders>` in the command are dimmed. `Label: value`
/// lines keep the label plain and color the value.
pub fn examples(text: &str) -> String {
    if !should_colorize() {
        return text.to_string();
    }

    text.lines()
        .map(|line| {
            let trimmed = line.trim_start();
            let indent = &line[..line.len() - trimmed.len()];

            if trimmed.ends_with(':') && !trimmed.contains("  ") {
                return format!("{indent}{}", paint(codes::HEADER, trimmed));
            }
            if let Some(split) = trimmed.find("  ") {
                let (cmd, desc) = trimmed.split_at(split);
                return format!("{indent}{}{desc}", colorize_command(cmd));
            }
            if let Some((label, value)) = trimmed.split_once(": ") {
                return format!("{indent}{label}: {}", paint(codes::LITERAL, value));
            }
            line.to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Colorize a command line: words as literals, quoted text and placeholders
/// as context.
pub fn colorize_command(cmd: &str) -> String {
    let mut result = String::with_capacity(cmd.len() + 64);
    let mut rest = cmd;

    while let Some(start) = rest.find(['"', '<']) {
        let close = if rest[start..].starts_with('"') { '"' } else { '>' };
        let end = rest[start + 1..]
            .find(close)
            .map_or(rest.len(), |i| start + 1 + i + 1);

        if start > 0 {
            result.push_str(&paint(codes::LITERAL, &rest[..start]));
        }
        result.push_str(&paint(codes::CONTEXT, &rest[start..end]));
        rest = &rest[end..];
    }
    if !rest.is_empty() {
        result.push_str(&paint(codes::LITERAL, rest));
    }
    result
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
