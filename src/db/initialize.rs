use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Bring a LogCalc database up to the current schema.
///
/// Creates the `log` audit table and the `documents` table that holds the
/// settings, run-history, shifts and logbook documents. Safe to call on every
/// open; applied steps are skipped.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    run_pending_migrations(conn)?;
    Ok(())
}
