//! Terminal output utilities.
//!
//! Box drawing and ANSI helpers. Lines end in `\r\n` so they render the
//! same with raw mode on or off.

use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const UNDERLINE: &str = "\x1b[4m";
pub const DIM: &str = "\x1b[90m";
pub const RED: &str = "\x1b[38;5;9m";
pub const BLUE: &str = "\x1b[38;5;39m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Print error message in red.
pub fn print_error(msg: &str) {
    print!("{RED}{msg}{RESET}\r\n");
}

/// Wrap every digit of `text` in the accent colour.
pub fn colored_digits(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if c.is_ascii_digit() {
            out.push_str(BLUE);
            out.push(c);
            out.push_str(RESET);
        } else {
            out.push(c);
        }
    }
    out
}

// ============================================================================
// Box Drawing (74 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 74;

/// Print box top with optional title: ┌─ Title ───────────────────────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        print!("┌{}┐\r\n", "─".repeat(BOX_WIDTH - 2));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = BOX_WIDTH - 2 - title_part.chars().count();
        print!("┌{}{}┐\r\n", title_part, "─".repeat(remaining));
    }
}

/// Print box content line: │ content                                        │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let padding = inner_width - display_len;
        print!("│ {}{} │\r\n", content, " ".repeat(padding));
    } else {
        print!("│ {} │\r\n", content);
    }
}

/// Print centered box content line: │          content          │
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let display_len = console_width(content);

    if display_len <= inner_width {
        let total_padding = inner_width - display_len;
        let left_pad = total_padding / 2;
        let right_pad = total_padding - left_pad;
        print!(
            "│ {}{}{} │\r\n",
            " ".repeat(left_pad),
            content,
            " ".repeat(right_pad)
        );
    } else {
        print!("│ {} │\r\n", content);
    }
}

/// Print a horizontal rule (box style).
pub fn print_rule() {
    print!("├{}┤\r\n", "─".repeat(BOX_WIDTH - 2));
}

/// Print box bottom: └───────────────────────────────────────────────────────┘
pub fn box_bottom() {
    print!("└{}┘\r\n", "─".repeat(BOX_WIDTH - 2));
}

/// Calculate display width accounting for ANSI escape codes.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c == 'm' {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
