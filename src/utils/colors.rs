/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Variance color:
/// \>0 → green
/// \<0 → red
/// 0 → reset
pub fn color_for_variance(value: f64) -> &'static str {
    if value > 0.0 {
        GREEN
    } else if value < 0.0 {
        RED
    } else {
        RESET
    }
}

/// Efficiency color: on target green, within 90% yellow, below red.
pub fn color_for_efficiency(efficiency: f64) -> &'static str {
    if efficiency >= 100.0 {
        GREEN
    } else if efficiency >= 90.0 {
        YELLOW
    } else {
        RED
    }
}

pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}

/// Grey out placeholders such as `-`.
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
