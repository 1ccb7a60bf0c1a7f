/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Progress color:
/// 100% → green
/// \>= 50% → yellow
/// otherwise → reset
pub fn color_for_progress(percentage: f64) -> &'static str {
    if percentage >= 100.0 {
        GREEN
    } else if percentage >= 50.0 {
        YELLOW
    } else {
        RESET
    }
}

/// Checked items fade to grey.
pub fn colorize_checked(value: &str, checked: bool) -> String {
    if checked {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

pub fn colorize_badge(value: &str) -> String {
    format!("{RED}{value}{RESET}")
}

pub fn colorize_id(value: &str) -> String {
    format!("{CYAN}{value}{RESET}")
}
