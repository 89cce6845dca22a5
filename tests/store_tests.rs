use logcalc::db::{MemoryPort, PersistencePort, SqlitePort};
use logcalc::errors::AppError;
use logcalc::models::material::{MaterialPatch, describe_material};
use logcalc::models::run_entry::{NewRunEntry, RunEntryPatch};
use logcalc::models::shift::{NewShift, NewShiftEntry, ShiftPatch};
use logcalc::store::{
    MaterialRegistry, RunHistoryStore, SETTINGS_KEY, SHIFTS_KEY, ShiftStore,
};

fn run(material: &str, speed: f64) -> NewRunEntry {
    NewRunEntry {
        material_id: material.to_string(),
        speed,
        target_rate: 18.89,
        actual_output: None,
        notes: None,
    }
}

fn new_shift(start: &str, end: &str) -> NewShift {
    NewShift {
        start_time: start.to_string(),
        end_time: end.to_string(),
        target_output: 6000.0,
        material_id: "1".to_string(),
        notes: Some("night crew".to_string()),
    }
}

#[test]
fn test_registry_seeds_defaults_when_never_saved() {
    let port = MemoryPort::new();
    let registry = MaterialRegistry::open(&port).unwrap();

    let labels: Vec<String> = registry.list().iter().map(|m| m.label()).collect();
    assert_eq!(labels, vec!["105mm", "112mm"]);
    assert!(registry.list().iter().all(|m| m.constant == 0.04198));
    assert!(port.load(SETTINGS_KEY).unwrap().is_none());
}

#[test]
fn test_registry_add_update_remove_persist() {
    let port = MemoryPort::new();
    {
        let mut registry = MaterialRegistry::open(&port).unwrap();
        let m = registry.add(120.0, 0.05).unwrap();
        assert!(
            registry
                .update(&m.id, MaterialPatch { constant: Some(0.06), ..Default::default() })
                .unwrap()
        );
        assert!(registry.remove("1").unwrap());
        assert!(!registry.remove("1").unwrap());
        assert!(!registry.update("missing", MaterialPatch::default()).unwrap());
    }

    let reopened = MaterialRegistry::open(&port).unwrap();
    assert_eq!(reopened.list().len(), 2);
    assert!(reopened.get("1").is_none());
    let added = reopened.list().iter().find(|m| m.diameter == 120.0).unwrap();
    assert_eq!(added.constant, 0.06);
}

#[test]
fn test_registry_rejects_non_positive_constants() {
    let port = MemoryPort::new();
    let mut registry = MaterialRegistry::open(&port).unwrap();

    assert!(matches!(registry.add(105.0, 0.0), Err(AppError::InvalidMaterial(_))));
    let patch = MaterialPatch { constant: Some(-1.0), ..Default::default() };
    assert!(matches!(registry.update("1", patch), Err(AppError::InvalidMaterial(_))));
    assert_eq!(registry.get("1").unwrap().constant, 0.04198);
}

#[test]
fn test_registry_reset_to_defaults() {
    let port = MemoryPort::new();
    let mut registry = MaterialRegistry::open(&port).unwrap();
    registry.remove("1").unwrap();
    registry.remove("2").unwrap();
    assert!(registry.list().is_empty());

    registry.reset_to_defaults().unwrap();
    assert_eq!(registry.list().len(), 2);
}

#[test]
fn test_history_newest_first_and_limit() {
    let port = MemoryPort::new();
    let mut history = RunHistoryStore::open(&port).unwrap();

    let first = history.add_entry(run("1", 100.0)).unwrap();
    let second = history.add_entry(run("1", 200.0)).unwrap();
    let third = history.add_entry(run("2", 300.0)).unwrap();

    let ids: Vec<&str> = history.entries().iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec![third.id.as_str(), second.id.as_str(), first.id.as_str()]);
    assert_eq!(history.recent(2).len(), 2);
    assert_eq!(history.recent(50).len(), 3);

    let reopened = RunHistoryStore::open(&port).unwrap();
    assert_eq!(reopened.entries(), history.entries());
}

#[test]
fn test_history_update_and_delete() {
    let port = MemoryPort::new();
    let mut history = RunHistoryStore::open(&port).unwrap();
    let e = history.add_entry(run("1", 450.0)).unwrap();
    assert_eq!(e.variance_percent(), None);

    let patch = RunEntryPatch {
        actual_output: Some(Some(17.0)),
        notes: Some(Some("slow start".to_string())),
        ..Default::default()
    };
    assert!(history.update_entry(&e.id, patch).unwrap());

    let updated = history.get(&e.id).unwrap();
    assert_eq!(updated.actual_output, Some(17.0));
    assert_eq!(updated.speed, 450.0);
    assert!(updated.variance_percent().unwrap() < 0.0);

    assert!(!history.update_entry("nope", RunEntryPatch::default()).unwrap());
    assert!(history.delete_entry(&e.id).unwrap());
    assert!(!history.delete_entry(&e.id).unwrap());
    assert!(history.entries().is_empty());
}

#[test]
fn test_removed_material_leaves_history_untouched() {
    let port = MemoryPort::new();
    let mut registry = MaterialRegistry::open(&port).unwrap();
    let mut history = RunHistoryStore::open(&port).unwrap();

    let e = history.add_entry(run("2", 238.21)).unwrap();
    registry.remove("2").unwrap();

    let kept = RunHistoryStore::open(&port).unwrap();
    assert_eq!(kept.get(&e.id).unwrap().material_id, "2");
    assert_eq!(describe_material(registry.get("2")), "Unknown");
}

#[test]
fn test_shift_add_entry_and_update_keep_entries() {
    let port = MemoryPort::new();
    let mut store = ShiftStore::open(&port).unwrap();

    let s = store
        .add_shift(new_shift("2026-10-16T18:00", "2026-10-17T06:00"))
        .unwrap();
    assert!(s.entries.is_empty());

    let entry = store
        .add_entry(
            &s.id,
            NewShiftEntry {
                timestamp: 1_000,
                material_id: "1".to_string(),
                speed: 210.0,
                duration_minutes: 60,
                actual_output: 520.0,
                notes: None,
            },
        )
        .unwrap()
        .unwrap();

    let patch = ShiftPatch { target_output: Some(6500.0), ..Default::default() };
    assert!(store.update_shift(&s.id, patch).unwrap());

    let reopened = ShiftStore::open(&port).unwrap();
    assert_eq!(reopened.shifts(), store.shifts());
    let saved = reopened.get(&s.id).unwrap();
    assert_eq!(saved.target_output, 6500.0);
    assert_eq!(saved.entries.len(), 1);
    assert_eq!(saved.entries[0].id, entry.id);
    assert_eq!(saved.notes.as_deref(), Some("night crew"));
}

#[test]
fn test_shift_window_is_validated() {
    let port = MemoryPort::new();
    let mut store = ShiftStore::open(&port).unwrap();

    assert!(matches!(
        store.add_shift(new_shift("yesterday", "2026-10-17T06:00")),
        Err(AppError::InvalidDate(_))
    ));
    assert!(matches!(
        store.add_shift(new_shift("2026-10-17T06:00", "2026-10-16T18:00")),
        Err(AppError::InvalidDate(_))
    ));

    let s = store
        .add_shift(new_shift("2026-10-16T18:00", "2026-10-17T06:00"))
        .unwrap();
    let bad = ShiftPatch { end_time: Some("2026-10-16T17:00".to_string()), ..Default::default() };
    assert!(store.update_shift(&s.id, bad).is_err());
    assert_eq!(store.get(&s.id).unwrap().end_time, "2026-10-17T06:00");
}

#[test]
fn test_shift_unknown_ids_are_noops() {
    let port = MemoryPort::new();
    let mut store = ShiftStore::open(&port).unwrap();

    assert!(!store.delete_shift("missing").unwrap());
    assert!(!store.update_shift("missing", ShiftPatch::default()).unwrap());
    let none = store
        .add_entry(
            "missing",
            NewShiftEntry {
                timestamp: 0,
                material_id: "1".to_string(),
                speed: 1.0,
                duration_minutes: 1,
                actual_output: 1.0,
                notes: None,
            },
        )
        .unwrap();
    assert!(none.is_none());
    assert!(port.load(SHIFTS_KEY).unwrap().is_none());
}

#[test]
fn test_legacy_shifts_without_entries_are_backfilled() {
    let legacy = r#"{
        "state": {
            "shifts": [
                {
                    "id": "old",
                    "startDateTime": "2026-10-01T06:00",
                    "endDateTime": "2026-10-01T18:00",
                    "targetLogs": 6000,
                    "diameterId": "1"
                }
            ]
        },
        "version": 0
    }"#;
    let port = MemoryPort::new().with_document(SHIFTS_KEY, legacy);

    let store = ShiftStore::open(&port).unwrap();
    let s = store.get("old").unwrap();
    assert!(s.entries.is_empty());
    assert_eq!(s.start_time, "2026-10-01T06:00");
    assert_eq!(s.target_output, 6000.0);
}

#[test]
fn test_sqlite_port_round_trip() {
    let port = SqlitePort::in_memory().unwrap();
    assert!(port.load("settings").unwrap().is_none());

    port.save("settings", r#"{"diameters":[]}"#).unwrap();
    port.save("settings", r#"{"diameters":[{"id":"x","diameter":90,"constant":0.1}]}"#)
        .unwrap();

    let registry = MaterialRegistry::open(&port).unwrap();
    assert_eq!(registry.list().len(), 1);
    assert_eq!(registry.get("x").unwrap().label(), "90mm");
}

#[test]
fn test_sqlite_port_records_migrations() {
    let port = SqlitePort::in_memory().unwrap();
    let rows = logcalc::db::log::load_log(port.conn()).unwrap();
    assert!(rows.iter().any(|r| r.operation == "migration_applied"));
}

#[test]
fn test_sqlite_port_creates_missing_directory_and_persists() {
    let dir = tempfile::tempdir().expect("temp dir");
    let db = dir.path().join("line2").join("logcalc.sqlite");
    let db = db.to_string_lossy().to_string();

    let port = SqlitePort::open(&db).unwrap();
    let mut history = RunHistoryStore::open(&port).unwrap();
    history.add_entry(run("1", 450.0)).unwrap();
    history.add_entry(run("2", 238.21)).unwrap();

    let again = SqlitePort::open(&db).unwrap();
    let reopened = RunHistoryStore::open(&again).unwrap();
    assert_eq!(reopened.entries(), history.entries());
}
