use chrono::{Local, TimeZone};
use logcalc::core::history::{hit_rate, hourly_profile};
use logcalc::models::run_entry::RunEntry;
use logcalc::utils::date::{hour_of_day, parse_datetime};

fn run_at(hour: u32, target: f64, actual: Option<f64>) -> RunEntry {
    let ts = Local
        .with_ymd_and_hms(2026, 10, 16, hour, 15, 0)
        .single()
        .expect("unambiguous local time")
        .timestamp_millis();
    RunEntry {
        id: format!("run-{hour}-{target}"),
        timestamp: ts,
        material_id: "1".to_string(),
        speed: 200.0,
        target_rate: target,
        actual_output: actual,
        notes: None,
    }
}

#[test]
fn test_hourly_profile_averages_per_hour() {
    let entries = vec![
        run_at(8, 10.0, Some(9.0)),
        run_at(8, 20.0, Some(21.0)),
        run_at(14, 18.0, None),
    ];

    let profile = hourly_profile(&entries);
    assert_eq!(profile.len(), 24);

    assert_eq!(profile[8].count, 2);
    assert_eq!(profile[8].target, 15.0);
    assert_eq!(profile[8].actual, 15.0);

    assert_eq!(profile[14].count, 1);
    assert_eq!(profile[14].actual, 0.0);

    assert_eq!(profile[3].count, 0);
    assert_eq!(profile[3].target, 0.0);
}

#[test]
fn test_hit_rate_counts_only_measured_runs() {
    assert_eq!(hit_rate(&[]), None);
    assert_eq!(hit_rate(&[run_at(8, 10.0, None)]), None);

    let entries = vec![
        run_at(8, 10.0, Some(10.0)),
        run_at(9, 10.0, Some(9.0)),
        run_at(10, 10.0, None),
    ];
    assert_eq!(hit_rate(&entries), Some(50.0));
}

#[test]
fn test_variance_percent() {
    let over = run_at(8, 10.0, Some(11.0)).variance_percent().unwrap();
    assert!((over - 10.0).abs() < 1e-9);
    assert_eq!(run_at(8, 0.0, Some(11.0)).variance_percent(), None);
    assert_eq!(run_at(8, 10.0, None).variance_percent(), None);
}

#[test]
fn test_parse_datetime_shapes() {
    let minute = parse_datetime("2026-10-16T06:00").unwrap();
    assert_eq!(parse_datetime("2026-10-16 06:00"), Some(minute));
    assert_eq!(parse_datetime("2026-10-16T06:00:00.000"), Some(minute));
    assert!(parse_datetime("2026-10-16T06:00:00Z").is_some());
    assert_eq!(parse_datetime("16/10/2026"), None);
    assert_eq!(parse_datetime(""), None);
}

#[test]
fn test_hour_of_day_is_local() {
    assert_eq!(hour_of_day(run_at(14, 1.0, None).timestamp), Some(14));
}
