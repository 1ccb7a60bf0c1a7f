//! Formatting utilities used for CLI outputs.

use crate::core::Progress;
use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn strikethrough(s: &str) -> String {
    format!("\x1b[9m{}\x1b[0m", s)
}

/// Left-align to `width` terminal columns (emoji and wide glyphs count double).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    if w >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - w))
    }
}

/// `[#########-----------]`
pub fn progress_bar(progress: &Progress, width: usize) -> String {
    let filled = if progress.total == 0 {
        0
    } else {
        (progress.checked * width) / progress.total
    };
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}

/// "3/16 packed (18%)"
pub fn progress_summary(progress: &Progress) -> String {
    format!(
        "{}/{} packed ({:.0}%)",
        progress.checked,
        progress.total,
        progress.percentage()
    )
}
