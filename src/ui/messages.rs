//! User-facing status lines.
//!
//! Errors go to stderr, everything else to stdout.

use std::fmt;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Level::Info => ("\x1b[34m", "ℹ️"),
            Level::Success => ("\x1b[32m", "✅"),
            Level::Warning => ("\x1b[33m", "⚠️"),
            Level::Error => ("\x1b[31m", "❌"),
        }
    }
}

fn emit(level: Level, msg: &dyn fmt::Display) {
    let (color, icon) = level.style();
    let line = format!("{color}{BOLD}{icon} {RESET}{msg}");
    match level {
        Level::Error => eprintln!("{line}"),
        _ => println!("{line}"),
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, &msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Success, &msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, &msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, &msg);
}

/// Red banner for production that is behind target, e.g. `🚨 Behind target: 26 logs short.`
pub fn alert<T: fmt::Display>(title: &str, msg: T) {
    let (color, _) = Level::Error.style();
    println!("{color}{BOLD}🚨 {title}:{RESET} {msg}");
}

/// Section title above a table.
pub fn header<T: fmt::Display>(msg: T) {
    let (color, _) = Level::Info.style();
    println!("{color}{BOLD}── {msg} ──{RESET}\n");
}
