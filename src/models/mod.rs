pub mod hourly_cell;
pub mod logbook;
pub mod material;
pub mod run_entry;
pub mod shift;

use chrono::Utc;
use uuid::Uuid;

/// Fresh opaque identifier for a new entity.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

/// Current wall clock as epoch milliseconds.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
