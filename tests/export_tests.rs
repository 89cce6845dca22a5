mod common;
use common::{init_db, init_db_with_runs, iso_in_hours, lc, setup_test_db, temp_out};
use logcalc::export::{run_export_rows, shift_export_document};
use logcalc::models::material::MaterialSetting;
use logcalc::models::run_entry::RunEntry;
use logcalc::models::shift::Shift;
use predicates::str::contains;
use std::fs;

#[test]
fn test_export_history_csv() {
    let db_path = setup_test_db("export_history_csv");
    init_db_with_runs(&db_path);

    let out = temp_out("export_history_csv", "csv");

    lc().args([
        "--db", &db_path, "export", "--kind", "history", "--format", "csv", "--file", &out,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("id,date,material,speed,target_rate,actual_output,variance,notes"));
    assert!(content.contains("105mm"));
    assert!(content.contains("112mm"));
    assert!(content.contains("first run"));
}

#[test]
fn test_export_history_json() {
    let db_path = setup_test_db("export_history_json");
    init_db_with_runs(&db_path);

    let out = temp_out("export_history_json", "json");

    lc().args([
        "--db", &db_path, "export", "--kind", "history", "--format", "json", "--file", &out,
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    assert_eq!(rows.as_array().map(Vec::len), Some(2));
    assert_eq!(rows[1]["variance"], "-4.7%");
}

#[test]
fn test_export_shifts_json() {
    let db_path = setup_test_db("export_shifts_json");
    init_db(&db_path);

    let start = iso_in_hours(-1);
    let end = iso_in_hours(11);
    lc().args([
        "--db", &db_path, "shift", "add", "--start", &start, "--end", &end, "--target", "6000",
    ])
    .assert()
    .success();

    let out = temp_out("export_shifts_json", "json");
    lc().args(["--db", &db_path, "export", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let doc: serde_json::Value = serde_json::from_str(&content).expect("valid json");
    let shift = &doc["shifts"][0];
    assert_eq!(shift["efficiency"], "0.0%");
    assert_eq!(shift["isActive"], true);
    assert!(shift["friendlyName"].as_str().unwrap().contains(" at "));
}

#[test]
fn test_export_shifts_csv_is_rejected() {
    let db_path = setup_test_db("export_shifts_csv");
    init_db(&db_path);
    let out = temp_out("export_shifts_csv", "csv");

    lc().args(["--db", &db_path, "export", "--format", "csv", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("json only"));
}

#[test]
fn test_export_existing_file_asks_before_overwrite() {
    let db_path = setup_test_db("export_overwrite");
    init_db_with_runs(&db_path);
    let out = temp_out("export_overwrite", "csv");
    fs::write(&out, "keep me").unwrap();

    let args = [
        "--db", &db_path, "export", "--kind", "history", "--format", "csv", "--file", &out,
    ];

    lc().args(args)
        .write_stdin("n\n")
        .assert()
        .failure()
        .stderr(contains("left unchanged"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    lc().args(args).write_stdin("y\n").assert().success();
    assert!(fs::read_to_string(&out).unwrap().contains("105mm"));

    lc().args(args).arg("--force").assert().success();
}

#[test]
fn test_export_relative_path_is_rejected() {
    let db_path = setup_test_db("export_relative");
    init_db(&db_path);

    lc().args(["--db", &db_path, "export", "--file", "relative.json"])
        .assert()
        .failure()
        .stderr(contains("must be absolute"));
}

#[test]
fn test_export_empty_history_writes_nothing() {
    let db_path = setup_test_db("export_empty_history");
    init_db(&db_path);
    let out = temp_out("export_empty_history", "csv");

    lc().args([
        "--db", &db_path, "export", "--kind", "history", "--format", "csv", "--file", &out,
    ])
    .assert()
    .success()
    .stdout(contains("No run history"));

    assert!(!std::path::Path::new(&out).exists());
}

#[test]
fn test_shift_export_skips_invalid_dates_and_formats_locale() {
    let now = chrono::NaiveDate::from_ymd_opt(2026, 10, 16)
        .and_then(|d| d.and_hms_opt(10, 0, 0))
        .unwrap();
    let good = Shift {
        id: "good".to_string(),
        start_time: "2026-10-16T06:00".to_string(),
        end_time: "2026-10-16T18:00".to_string(),
        target_output: 100.0,
        material_id: "1".to_string(),
        notes: None,
        entries: Vec::new(),
    };
    let bad = Shift {
        id: "bad".to_string(),
        start_time: "garbage".to_string(),
        ..good.clone()
    };

    let doc = shift_export_document(&[bad, good], now);
    assert_eq!(doc.shifts.len(), 1);
    assert_eq!(doc.shifts[0].start_time, "10/16/2026, 6:00:00 AM");
    assert_eq!(doc.shifts[0].end_time, "10/16/2026, 6:00:00 PM");
    assert!(doc.shifts[0].is_active);
}

#[test]
fn test_run_rows_show_unknown_material() {
    let entry = RunEntry {
        id: "r".to_string(),
        timestamp: 0,
        material_id: "deleted".to_string(),
        speed: 100.0,
        target_rate: 10.0,
        actual_output: Some(11.0),
        notes: None,
    };
    let rows = run_export_rows(&[entry], &[MaterialSetting::new("1", 105.0, 0.04198)]);
    assert_eq!(rows[0].material, "Unknown");
    assert_eq!(rows[0].variance.as_deref(), Some("10.0%"));
}

#[test]
fn test_expand_tilde_only_touches_leading_home() {
    use logcalc::utils::path::expand_tilde;

    assert_eq!(expand_tilde("/tmp/runs.csv"), std::path::PathBuf::from("/tmp/runs.csv"));
    assert_eq!(expand_tilde("~user/runs.csv"), std::path::PathBuf::from("~user/runs.csv"));

    if let Some(home) = dirs::home_dir() {
        assert_eq!(expand_tilde("~/runs.csv"), home.join("runs.csv"));
        assert_eq!(expand_tilde("~"), home);
    }
}
