//! Persistence port used by the stores.
//!
//! A store reads its whole document once when it is opened and writes the
//! whole document back after every mutation. Adapters only need to move
//! opaque strings in and out of named slots.

use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::{load_document, save_document};
use crate::errors::AppResult;
use rusqlite::Connection;
use std::cell::RefCell;
use std::collections::HashMap;

pub trait PersistencePort {
    /// Raw document for `key`, or `None` if it was never saved.
    fn load(&self, key: &str) -> AppResult<Option<String>>;

    /// Replace the document for `key`.
    fn save(&self, key: &str, document: &str) -> AppResult<()>;
}

/// Documents kept in the application SQLite database.
pub struct SqlitePort {
    pool: DbPool,
}

impl SqlitePort {
    /// Open the database at `path` and apply pending migrations.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }
}

impl PersistencePort for SqlitePort {
    fn load(&self, key: &str) -> AppResult<Option<String>> {
        load_document(&self.pool.conn, key)
    }

    fn save(&self, key: &str, document: &str) -> AppResult<()> {
        save_document(&self.pool.conn, key, document)
    }
}

/// Volatile in-process documents.
#[derive(Debug, Default)]
pub struct MemoryPort {
    slots: RefCell<HashMap<String, String>>,
}

impl MemoryPort {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a slot with a raw document, e.g. one written by an older release.
    pub fn with_document(self, key: &str, document: &str) -> Self {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), document.to_string());
        self
    }
}

impl PersistencePort for MemoryPort {
    fn load(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.slots.borrow().get(key).cloned())
    }

    fn save(&self, key: &str, document: &str) -> AppResult<()> {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), document.to_string());
        Ok(())
    }
}
