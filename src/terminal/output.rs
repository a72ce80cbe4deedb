//! Terminal output utilities.
//!
//! Box drawing and ANSI helpers. Lines end in `\r\n` so the same helpers
//! render correctly in raw mode.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const REVERSE: &str = "\x1b[7m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;2m";
pub const MINT: &str = "\x1b[38;5;122m";

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

/// Reset terminal to sane state.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}\x1b[?25h");
    flush();
}

/// True when stdin is a terminal.
pub fn is_tty() -> bool {
    unsafe { libc::isatty(0) == 1 }
}

/// Print one line, raw-mode safe.
pub fn line(content: &str) {
    print!("{content}\r\n");
}

/// Print error message in red.
pub fn print_error(msg: &str) {
    line(&format!("{RED}{msg}{RESET}"));
}

// ============================================================================
// Box Drawing
// ============================================================================

pub const BOX_WIDTH: usize = 46;

/// ┌─ Title ──────────┐
pub fn box_top(title: &str) {
    if title.is_empty() {
        line(&format!("┌{}┐", "─".repeat(BOX_WIDTH - 2)));
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(console_width(&title_part));
        line(&format!("┌{}{}┐", title_part, "─".repeat(remaining)));
    }
}

/// │ content          │
pub fn box_line(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let padding = inner_width.saturating_sub(console_width(content));
    line(&format!("│ {}{} │", content, " ".repeat(padding)));
}

/// │     content      │
pub fn box_line_center(content: &str) {
    let inner_width = BOX_WIDTH - 4;
    let total_padding = inner_width.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    line(&format!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    ));
}

/// Left and right aligned content on one line: │ left        right │
pub fn box_line_split(left: &str, right: &str) {
    let inner_width = BOX_WIDTH - 4;
    let gap = inner_width.saturating_sub(console_width(left) + console_width(right));
    line(&format!("│ {}{}{} │", left, " ".repeat(gap), right));
}

/// ├──────────────────┤
pub fn print_rule() {
    line(&format!("├{}┤", "─".repeat(BOX_WIDTH - 2)));
}

/// └──────────────────┘
pub fn box_bottom() {
    line(&format!("└{}┘", "─".repeat(BOX_WIDTH - 2)));
}

/// Print a help option with flag and description, auto-wrapping if needed.
pub fn box_opt(flag: &str, desc: &str) {
    let inner_width = BOX_WIDTH - 4;
    let flag_col = 20;
    let desc_col = inner_width - flag_col;

    let flag_padded = format!("{:<width$}", flag, width = flag_col);

    let mut lines: Vec<String> = Vec::new();
    let mut current_line = String::new();

    for word in desc.split_whitespace() {
        if current_line.is_empty() {
            current_line = word.to_string();
        } else if current_line.len() + 1 + word.len() <= desc_col {
            current_line.push(' ');
            current_line.push_str(word);
        } else {
            lines.push(std::mem::take(&mut current_line));
            current_line = word.to_string();
        }
    }
    if !current_line.is_empty() {
        lines.push(current_line);
    }

    let first = lines.first().map(String::as_str).unwrap_or("");
    box_line(&format!("{}{}", flag_padded, first));

    let indent = " ".repeat(flag_col);
    for rest in lines.iter().skip(1) {
        box_line(&format!("{}{}", indent, rest));
    }
}

/// Display width, skipping ANSI escape sequences.
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

// ============================================================================
// Slider
// ============================================================================

/// Horizontal slider track: filled up to `value` out of `max`.
pub fn slider(value: usize, max: usize, width: usize) -> String {
    let max = max.max(1);
    let filled = (value.min(max) * width) / max;
    let thumb = filled.min(width.saturating_sub(1));
    let mut track = String::with_capacity(width * 3 + 16);
    track.push_str(MINT);
    track.push_str(&"━".repeat(thumb));
    track.push_str(RESET);
    track.push('●');
    track.push_str(DIM);
    track.push_str(&"─".repeat(width.saturating_sub(thumb + 1)));
    track.push_str(RESET);
    track
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_ignores_escape_codes() {
        assert_eq!(console_width("plain"), 5);
        assert_eq!(console_width(&format!("{RED}red{RESET}")), 3);
        assert_eq!(console_width("★ High"), 6);
    }

    #[test]
    fn slider_keeps_its_width() {
        for value in [0, 1, 10, 29, 30, 99] {
            assert_eq!(console_width(&slider(value, 30, 40)), 40);
        }
    }

    #[test]
    fn slider_thumb_moves_with_value() {
        let low = slider(0, 30, 30);
        let high = slider(30, 30, 30);
        assert!(console_width(&low) == console_width(&high));
        assert!(low.find('●') < high.find('●'));
    }
}
