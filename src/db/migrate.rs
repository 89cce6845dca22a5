use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result, params};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check whether a migration version has already been recorded in `log`.
fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_applied(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        params![chrono::Local::now().to_rfc3339(), version, message],
    )?;
    Ok(())
}

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Check if `table` has a column called `column`.
fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{table}')"))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

/// One JSON document per logical store, keyed by store name.
fn migrate_create_documents(conn: &Connection) -> Result<()> {
    let version = "20260901_0001_create_documents";

    if is_applied(conn, version)? {
        return Ok(());
    }

    if !table_exists(conn, "documents")? {
        conn.execute_batch(
            r#"
            CREATE TABLE documents (
                key    TEXT PRIMARY KEY,
                value  TEXT NOT NULL
            );
            "#,
        )?;
        success("Created documents table.");
    }

    mark_applied(conn, version, "Created documents table")?;
    Ok(())
}

/// Track when each document was last written.
fn migrate_add_updated_at(conn: &Connection) -> Result<()> {
    let version = "20260915_0002_add_documents_updated_at";

    if is_applied(conn, version)? {
        return Ok(());
    }

    if !has_column(conn, "documents", "updated_at")? {
        conn.execute(
            "ALTER TABLE documents ADD COLUMN updated_at TEXT NOT NULL DEFAULT ''",
            [],
        )?;
    }

    mark_applied(conn, version, "Added updated_at to documents")?;
    success(format!("Migration applied: {version}"));
    Ok(())
}

/// Run every pending migration in order. Idempotent.
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;
    migrate_create_documents(conn)?;
    migrate_add_updated_at(conn)?;
    Ok(())
}
