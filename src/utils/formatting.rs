//! Formatting utilities used for CLI and export outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Number with at most two decimals and no trailing zeros: `526`, `18.9`, `238.21`.
pub fn fmt_num(value: f64) -> String {
    let s = format!("{:.2}", value);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

/// Optional number, `-` when absent.
pub fn fmt_opt(value: Option<f64>) -> String {
    value.map(fmt_num).unwrap_or_else(|| "-".to_string())
}

/// Signed number: `+12`, `-26`, `0`.
pub fn fmt_signed(value: f64) -> String {
    if value > 0.0 {
        format!("+{}", fmt_num(value))
    } else {
        fmt_num(value)
    }
}

/// One decimal and a percent sign, e.g. `95.0%`.
pub fn fmt_percent(value: f64) -> String {
    let s = format!("{:.1}", value);
    if s == "-0.0" { "0.0%".to_string() } else { format!("{s}%") }
}

/// Wrap long free text for terminal output, indenting continuation lines.
pub fn wrap_text(text: &str, width: usize, indent: &str) -> String {
    let options = textwrap::Options::new(width)
        .initial_indent(indent)
        .subsequent_indent(indent);
    textwrap::fill(text, options)
}
