#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn lc() -> Command {
    cargo_bin_cmd!("logcalc")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_logcalc.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_logcalc_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize a fresh DB through the CLI (schema only, no config file)
pub fn init_db(db_path: &str) {
    lc().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and record a couple of runs on the seed material "1"
pub fn init_db_with_runs(db_path: &str) {
    init_db(db_path);

    lc().args([
        "--db", db_path, "history", "add", "-m", "1", "--speed", "450", "--target", "18.89",
        "--actual", "18", "--notes", "first run",
    ])
    .assert()
    .success();

    lc().args([
        "--db", db_path, "history", "add", "-m", "2", "--speed", "238.21", "--target", "10",
    ])
    .assert()
    .success();
}

/// `YYYY-MM-DDTHH:MM` for now shifted by `hours`.
pub fn iso_in_hours(hours: i64) -> String {
    (chrono::Local::now().naive_local() + chrono::Duration::hours(hours))
        .format("%Y-%m-%dT%H:%M")
        .to_string()
}
