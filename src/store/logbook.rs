use crate::db::port::PersistencePort;
use crate::errors::AppResult;
use crate::models::logbook::{
    ImageKind, LogbookDocument, LogbookEntry, LogbookImage, LogbookPatch, NewLogbookEntry,
};
use crate::models::{new_id, now_millis};
use crate::store::schema::load_logbook;
use crate::store::{LOGBOOK_KEY, write_document};

/// Free-form operator notes with attached pictures, newest first.
pub struct LogbookStore<'a> {
    port: &'a dyn PersistencePort,
    doc: LogbookDocument,
}

impl<'a> LogbookStore<'a> {
    pub fn open(port: &'a dyn PersistencePort) -> AppResult<Self> {
        let raw = port.load(LOGBOOK_KEY)?;
        let doc = load_logbook(raw.as_deref())?;
        Ok(Self { port, doc })
    }

    pub fn entries(&self) -> &[LogbookEntry] {
        &self.doc.entries
    }

    pub fn get(&self, id: &str) -> Option<&LogbookEntry> {
        self.doc.entries.iter().find(|e| e.id == id)
    }

    pub fn add_entry(&mut self, new: NewLogbookEntry) -> AppResult<LogbookEntry> {
        let entry = LogbookEntry {
            id: new_id(),
            timestamp: now_millis(),
            title: new.title,
            content: new.content,
            category: new.category,
            tags: new.tags,
            images: Vec::new(),
            material_id: new.material_id,
            speed: new.speed,
        };

        let mut next = self.doc.clone();
        next.entries.insert(0, entry.clone());
        self.commit(next)?;

        Ok(entry)
    }

    pub fn update_entry(&mut self, id: &str, patch: LogbookPatch) -> AppResult<bool> {
        let mut next = self.doc.clone();
        let Some(entry) = next.entries.iter_mut().find(|e| e.id == id) else {
            return Ok(false);
        };

        if let Some(t) = patch.title {
            entry.title = t;
        }
        if let Some(c) = patch.content {
            entry.content = c;
        }
        if let Some(c) = patch.category {
            entry.category = c;
        }
        if let Some(t) = patch.tags {
            entry.tags = t;
        }
        if let Some(m) = patch.material_id {
            entry.material_id = m;
        }
        if let Some(s) = patch.speed {
            entry.speed = s;
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

    /// Attach an image to entry `entry_id`. `None` if there is no such entry.
    pub fn add_image(
        &mut self,
        entry_id: &str,
        url: impl Into<String>,
        kind: ImageKind,
    ) -> AppResult<Option<LogbookImage>> {
        let mut next = self.doc.clone();
        let Some(entry) = next.entries.iter_mut().find(|e| e.id == entry_id) else {
            return Ok(None);
        };

        let image = LogbookImage {
            id: new_id(),
            url: url.into(),
            kind,
            timestamp: now_millis(),
        };
        entry.images.push(image.clone());

        self.commit(next)?;
        Ok(Some(image))
    }

    pub fn delete_image(&mut self, entry_id: &str, image_id: &str) -> AppResult<bool> {
        let mut next = self.doc.clone();
        let Some(entry) = next.entries.iter_mut().find(|e| e.id == entry_id) else {
            return Ok(false);
        };

        let before = entry.images.len();
        entry.images.retain(|img| img.id != image_id);
        if entry.images.len() == before {
            return Ok(false);
        }

        self.commit(next)?;
        Ok(true)
    }

    fn commit(&mut self, next: LogbookDocument) -> AppResult<()> {
        write_document(self.port, LOGBOOK_KEY, &next)?;
        self.doc = next;
        Ok(())
    }
}
