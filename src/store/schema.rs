//! Load-time normalization of persisted documents.
//!
//! Older releases wrapped documents as `{ "state": {...}, "version": n }`
//! and wrote shifts without `entries` and logbook entries without `images`.
//! These functions run exactly once, when a store is opened, and return a
//! document in the current shape.

use crate::errors::AppResult;
use crate::models::logbook::{LOGBOOK_SCHEMA_VERSION, LogbookDocument};
use crate::models::material::Settings;
use crate::models::run_entry::RunHistory;
use crate::models::shift::{SHIFTS_SCHEMA_VERSION, ShiftsDocument};
use serde_json::{Map, Value, json};

/// Unwrap the legacy `{ state, version }` envelope if present.
fn unwrap_state(doc: Value) -> Value {
    match doc {
        Value::Object(mut map) if map.get("state").is_some_and(Value::is_object) => {
            map.remove("state").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Take the object form of `doc`, or an empty object for anything else.
fn into_object(doc: Value) -> Map<String, Value> {
    match doc {
        Value::Object(map) => map,
        _ => Map::new(),
    }
}

/// Give every element of `map[list]` an empty `field` array if it lacks one.
fn backfill_array(map: &mut Map<String, Value>, list: &str, field: &str) {
    let items = map.entry(list.to_string()).or_insert_with(|| json!([]));
    if !items.is_array() {
        *items = json!([]);
    }

    if let Value::Array(items) = items {
        for item in items.iter_mut() {
            if let Value::Object(obj) = item {
                let missing = obj.get(field).is_none_or(Value::is_null);
                if missing {
                    obj.insert(field.to_string(), json!([]));
                }
            }
        }
    }
}

pub fn normalize_shifts(doc: Value) -> Value {
    let mut map = into_object(unwrap_state(doc));
    backfill_array(&mut map, "shifts", "entries");
    map.insert("version".to_string(), json!(SHIFTS_SCHEMA_VERSION));
    Value::Object(map)
}

pub fn normalize_logbook(doc: Value) -> Value {
    let mut map = into_object(unwrap_state(doc));
    backfill_array(&mut map, "entries", "images");
    map.insert("version".to_string(), json!(LOGBOOK_SCHEMA_VERSION));
    Value::Object(map)
}

pub fn load_settings(raw: Option<&str>) -> AppResult<Settings> {
    match raw {
        Some(raw) => Ok(serde_json::from_str(raw)?),
        None => Ok(Settings::default()),
    }
}

pub fn load_run_history(raw: Option<&str>) -> AppResult<RunHistory> {
    match raw {
        Some(raw) => Ok(serde_json::from_str(raw)?),
        None => Ok(RunHistory::default()),
    }
}

pub fn load_shifts(raw: Option<&str>) -> AppResult<ShiftsDocument> {
    match raw {
        Some(raw) => {
            let value: Value = serde_json::from_str(raw)?;
            Ok(serde_json::from_value(normalize_shifts(value))?)
        }
        None => Ok(ShiftsDocument::default()),
    }
}

pub fn load_logbook(raw: Option<&str>) -> AppResult<LogbookDocument> {
    match raw {
        Some(raw) => {
            let value: Value = serde_json::from_str(raw)?;
            Ok(serde_json::from_value(normalize_logbook(value))?)
        }
        None => Ok(LogbookDocument::default()),
    }
}
