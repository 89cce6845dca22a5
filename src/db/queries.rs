use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

/// Read the raw JSON document stored under `key`.
pub fn load_document(conn: &Connection, key: &str) -> AppResult<Option<String>> {
    let mut stmt = conn.prepare_cached("SELECT value FROM documents WHERE key = ?1")?;
    let value = stmt
        .query_row([key], |row| row.get::<_, String>(0))
        .optional()?;
    Ok(value)
}

/// Replace the whole document stored under `key`.
pub fn save_document(conn: &Connection, key: &str, value: &str) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO documents (key, value, updated_at)
         VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
    )?;
    stmt.execute(params![key, value, Local::now().to_rfc3339()])?;
    Ok(())
}
