use crate::db::port::PersistencePort;
use crate::errors::AppResult;
use crate::models::run_entry::{NewRunEntry, RunEntry, RunEntryPatch, RunHistory};
use crate::models::{new_id, now_millis};
use crate::store::schema::load_run_history;
use crate::store::{RUN_HISTORY_KEY, write_document};

/// Recorded calculation results, newest first.
pub struct RunHistoryStore<'a> {
    port: &'a dyn PersistencePort,
    doc: RunHistory,
}

impl<'a> RunHistoryStore<'a> {
    pub fn open(port: &'a dyn PersistencePort) -> AppResult<Self> {
        let raw = port.load(RUN_HISTORY_KEY)?;
        let doc = load_run_history(raw.as_deref())?;
        Ok(Self { port, doc })
    }

    pub fn entries(&self) -> &[RunEntry] {
        &self.doc.entries
    }

    /// At most `limit` of the newest entries.
    pub fn recent(&self, limit: usize) -> &[RunEntry] {
        &self.doc.entries[..limit.min(self.doc.entries.len())]
    }

    pub fn get(&self, id: &str) -> Option<&RunEntry> {
        self.doc.entries.iter().find(|e| e.id == id)
    }

    /// Record a run at the front of the history.
    pub fn add_entry(&mut self, new: NewRunEntry) -> AppResult<RunEntry> {
        let entry = RunEntry {
            id: new_id(),
            timestamp: now_millis(),
            material_id: new.material_id,
            speed: new.speed,
            target_rate: new.target_rate,
            actual_output: new.actual_output,
            notes: new.notes,
        };

        let mut next = self.doc.clone();
        next.entries.insert(0, entry.clone());
        self.commit(next)?;

        Ok(entry)
    }

    pub fn update_entry(&mut self, id: &str, patch: RunEntryPatch) -> AppResult<bool> {
        let mut next = self.doc.clone();
        let Some(entry) = next.entries.iter_mut().find(|e| e.id == id) else {
            return Ok(false);
        };

        if let Some(m) = patch.material_id {
            entry.material_id = m;
        }
        if let Some(s) = patch.speed {
            entry.speed = s;
        }
        if let Some(t) = patch.target_rate {
            entry.target_rate = t;
        }
        if let Some(a) = patch.actual_output {
            entry.actual_output = a;
        }
        if let Some(n) = patch.notes {
            entry.notes = n;
        }

        self.commit(next)?;
        Ok(true)
    }

    pub fn delete_entry(&mut self, id: &str) -> AppResult<bool> {
        if self.get(id).is_none() {
            return Ok(false);
        }

        let mut next = self.doc.clone();
        next.entries.retain(|e| e.id != id);
        self.commit(next)?;
        Ok(true)
    }

    fn commit(&mut self, next: RunHistory) -> AppResult<()> {
        write_document(self.port, RUN_HISTORY_KEY, &next)?;
        self.doc = next;
        Ok(())
    }
}
