//! Persisted entity stores.
//!
//! Each store is opened once against a [`PersistencePort`], normalizes its
//! document up front, and writes the complete document back after every
//! mutation. The in-memory state is only replaced once the write succeeded.

pub mod history;
pub mod logbook;
pub mod schema;
pub mod settings;
pub mod shifts;

pub use history::RunHistoryStore;
pub use logbook::LogbookStore;
pub use settings::MaterialRegistry;
pub use shifts::ShiftStore;

use crate::db::port::PersistencePort;
use crate::errors::AppResult;
use serde::Serialize;

pub const SETTINGS_KEY: &str = "settings";
pub const RUN_HISTORY_KEY: &str = "run-history";
pub const SHIFTS_KEY: &str = "shifts";
pub const LOGBOOK_KEY: &str = "logbook";

fn write_document<T: Serialize>(port: &dyn PersistencePort, key: &str, doc: &T) -> AppResult<()> {
    let raw = serde_json::to_string(doc)?;
    port.save(key, &raw)
}
