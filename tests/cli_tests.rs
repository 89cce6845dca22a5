use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;

mod common;
use common::{init_db, init_db_with_runs, iso_in_hours, lc, setup_test_db};

#[test]
fn test_init_reports_seed_materials() {
    let db_path = setup_test_db("cli_init");

    lc().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Materials  : 2"))
        .stdout(contains("initialization completed"));
}

#[test]
fn test_material_list_add_del() {
    let db_path = setup_test_db("cli_material");
    init_db(&db_path);

    lc().args(["--db", &db_path, "material", "list"])
        .assert()
        .success()
        .stdout(contains("105mm").and(contains("112mm")));

    lc().args(["--db", &db_path, "material", "add", "--diameter", "120", "--constant", "0.05"])
        .assert()
        .success()
        .stdout(contains("Material 120mm added"));

    lc().args(["--db", &db_path, "material", "del", "1"])
        .assert()
        .success();

    lc().args(["--db", &db_path, "material", "list"])
        .assert()
        .success()
        .stdout(contains("120mm").and(contains("105mm").not()));

    lc().args(["--db", &db_path, "material", "del", "1"])
        .assert()
        .failure()
        .stderr(contains("Material not found: 1"));
}

#[test]
fn test_material_rejects_zero_constant() {
    let db_path = setup_test_db("cli_material_zero");
    init_db(&db_path);

    lc().args(["--db", &db_path, "material", "add", "--diameter", "120", "--constant", "0"])
        .assert()
        .failure()
        .stderr(contains("constant must be a number > 0"));
}

#[test]
fn test_calc_rate_and_speed() {
    let db_path = setup_test_db("cli_calc");
    init_db(&db_path);

    lc().args(["--db", &db_path, "calc", "rate", "-m", "1", "--speed", "450"])
        .assert()
        .success()
        .stdout(contains("18.89 per minute"));

    lc().args(["--db", &db_path, "calc", "speed", "-m", "1", "--rate", "10"])
        .assert()
        .success()
        .stdout(contains("238.21 RPM"));
}

#[test]
fn test_calc_record_adds_history() {
    let db_path = setup_test_db("cli_calc_record");
    init_db(&db_path);

    lc().args([
        "--db", &db_path, "calc", "rate", "-m", "1", "--speed", "450", "--record", "--notes",
        "from calc",
    ])
    .assert()
    .success()
    .stdout(contains("Recorded in history"));

    lc().args(["--db", &db_path, "history", "list"])
        .assert()
        .success()
        .stdout(contains("from calc").and(contains("18.89")));
}

#[test]
fn test_calc_forecast() {
    let db_path = setup_test_db("cli_forecast");
    init_db(&db_path);

    lc().args(["--db", &db_path, "calc", "forecast", "-m", "1", "--speed", "450", "--hours", "3"])
        .assert()
        .success()
        .stdout(contains("Total: 3400").and(contains("Hour 3")));
}

#[test]
fn test_track_behind_shows_alert() {
    let db_path = setup_test_db("cli_track_behind");
    init_db(&db_path);

    lc().args(["--db", &db_path, "track", "-m", "1", "--actuals", "500"])
        .assert()
        .success()
        .stdout(contains("209.77"))
        .stdout(contains("Behind target"))
        .stdout(contains("208.83"));
}

#[test]
fn test_track_on_target() {
    let db_path = setup_test_db("cli_track_ok");
    init_db(&db_path);

    lc().args([
        "--db", &db_path, "track", "-m", "1", "--hours", "2", "--actuals", "530,530",
    ])
    .assert()
    .success()
    .stdout(contains("On target"));
}

#[test]
fn test_track_unknown_material_still_tracks() {
    let db_path = setup_test_db("cli_track_unknown");
    init_db(&db_path);

    lc().args(["--db", &db_path, "track", "-m", "gone", "--actuals", "500"])
        .assert()
        .success()
        .stdout(contains("Selected material not found"))
        .stdout(contains("Behind target"));
}

#[test]
fn test_track_rejects_long_lists() {
    let db_path = setup_test_db("cli_track_long");
    init_db(&db_path);

    lc().args(["--db", &db_path, "track", "--hours", "2", "--actuals", "1,2,3"])
        .assert()
        .failure()
        .stderr(contains("2-hour period"));
}

#[test]
fn test_history_update_and_delete() {
    let db_path = setup_test_db("cli_history");
    init_db_with_runs(&db_path);

    lc().args(["--db", &db_path, "history", "update", "missing", "--actual", "10"])
        .assert()
        .failure()
        .stderr(contains("Run not found"));

    lc().args(["--db", &db_path, "history", "list", "--limit", "1"])
        .assert()
        .success()
        .stdout(contains("112mm").and(contains("105mm").not()));

    lc().args(["--db", &db_path, "history", "list", "--profile"])
        .assert()
        .success()
        .stdout(contains("Average per hour of day"));
}

#[test]
fn test_history_shows_unknown_after_material_removed() {
    let db_path = setup_test_db("cli_history_unknown");
    init_db_with_runs(&db_path);

    lc().args(["--db", &db_path, "material", "del", "2"])
        .assert()
        .success();

    lc().args(["--db", &db_path, "history", "list"])
        .assert()
        .success()
        .stdout(contains("Unknown"));
}

#[test]
fn test_shift_lifecycle() {
    let db_path = setup_test_db("cli_shift");
    init_db(&db_path);

    let start = iso_in_hours(-2);
    let end = iso_in_hours(10);
    lc().args([
        "--db", &db_path, "shift", "add", "--start", &start, "--end", &end, "--target", "1000",
    ])
    .assert()
    .success()
    .stdout(contains("Shift added"));

    let later_start = iso_in_hours(24);
    let later_end = iso_in_hours(36);
    lc().args([
        "--db", &db_path, "shift", "add", "--start", &later_start, "--end", &later_end,
        "--target", "1000",
    ])
    .assert()
    .success();

    lc().args(["--db", &db_path, "shift", "list", "--upcoming"])
        .assert()
        .success()
        .stdout(contains("Upcoming shifts (1)").and(contains("Current shifts").not()));

    lc().args(["--db", &db_path, "shift", "list"])
        .assert()
        .success()
        .stdout(contains("Current shifts (1)"))
        .stdout(contains("(active)"))
        .stdout(contains("Shift history (0)"));
}

#[test]
fn test_shift_rejects_end_before_start() {
    let db_path = setup_test_db("cli_shift_bad");
    init_db(&db_path);

    let start = iso_in_hours(5);
    let end = iso_in_hours(1);
    lc().args([
        "--db", &db_path, "shift", "add", "--start", &start, "--end", &end, "--target", "1000",
    ])
    .assert()
    .failure()
    .stderr(contains("must be after start"));
}

#[test]
fn test_shift_entry_for_missing_shift() {
    let db_path = setup_test_db("cli_shift_entry_missing");
    init_db(&db_path);

    lc().args([
        "--db", &db_path, "shift", "entry", "nope", "--speed", "200", "--duration", "60",
        "--actual", "500",
    ])
    .assert()
    .failure()
    .stderr(contains("Shift not found"));
}

#[test]
fn test_logbook_add_list_tags() {
    let db_path = setup_test_db("cli_logbook");
    init_db(&db_path);

    lc().args([
        "--db", &db_path, "logbook", "add", "--title", "Belt slipping", "--content",
        "Tension adjusted", "--category", "issue", "--tag", "belt", "--tag", "line2",
    ])
    .assert()
    .success()
    .stdout(contains("Logbook entry added"));

    lc().args([
        "--db", &db_path, "logbook", "add", "--title", "Bearings greased", "--content",
        "Weekly round",
    ])
    .assert()
    .success();

    lc().args(["--db", &db_path, "logbook", "list", "--tag", "belt"])
        .assert()
        .success()
        .stdout(contains("Belt slipping").and(contains("Bearings greased").not()));

    lc().args(["--db", &db_path, "logbook", "list", "--category", "observation"])
        .assert()
        .success()
        .stdout(contains("Bearings greased"));

    lc().args(["--db", &db_path, "logbook", "tags"])
        .assert()
        .success()
        .stdout(contains("belt").and(contains("line2")));
}

#[test]
fn test_logbook_rejects_unknown_category() {
    let db_path = setup_test_db("cli_logbook_category");
    init_db(&db_path);

    lc().args([
        "--db", &db_path, "logbook", "add", "--title", "x", "--content", "y", "--category",
        "gossip",
    ])
    .assert()
    .failure()
    .stderr(contains("Invalid logbook category"));
}

#[test]
fn test_log_print_shows_operations() {
    let db_path = setup_test_db("cli_log");
    init_db_with_runs(&db_path);

    lc().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("migration_applied"))
        .stdout(contains("history"));
}

#[test]
fn test_log_without_print_shows_hint() {
    let db_path = setup_test_db("cli_log_hint");
    init_db(&db_path);

    lc().args(["--db", &db_path, "log"])
        .assert()
        .success()
        .stdout(contains("log --print"));
}
