use crate::db::port::PersistencePort;
use crate::errors::{AppError, AppResult};
use crate::models::new_id;
use crate::models::shift::{NewShift, NewShiftEntry, Shift, ShiftEntry, ShiftPatch, ShiftsDocument};
use crate::store::schema::load_shifts;
use crate::store::{SHIFTS_KEY, write_document};
use crate::utils::date::parse_datetime;

/// New or edited shifts must have parseable boundaries with end after start.
fn validate_window(start: &str, end: &str) -> AppResult<()> {
    let s = parse_datetime(start).ok_or_else(|| AppError::InvalidDate(start.to_string()))?;
    let e = parse_datetime(end).ok_or_else(|| AppError::InvalidDate(end.to_string()))?;
    if e <= s {
        return Err(AppError::InvalidDate(format!(
            "shift end {end} must be after start {start}"
        )));
    }
    Ok(())
}

pub struct ShiftStore<'a> {
    port: &'a dyn PersistencePort,
    doc: ShiftsDocument,
}

impl<'a> ShiftStore<'a> {
    pub fn open(port: &'a dyn PersistencePort) -> AppResult<Self> {
        let raw = port.load(SHIFTS_KEY)?;
        let doc = load_shifts(raw.as_deref())?;
        Ok(Self { port, doc })
    }

    pub fn shifts(&self) -> &[Shift] {
        &self.doc.shifts
    }

    pub fn get(&self, id: &str) -> Option<&Shift> {
        self.doc.shifts.iter().find(|s| s.id == id)
    }

    pub fn add_shift(&mut self, new: NewShift) -> AppResult<Shift> {
        validate_window(&new.start_time, &new.end_time)?;

        let shift = Shift {
            id: new_id(),
            start_time: new.start_time,
            end_time: new.end_time,
            target_output: new.target_output,
            material_id: new.material_id,
            notes: new.notes,
            entries: Vec::new(),
        };

        let mut next = self.doc.clone();
        next.shifts.push(shift.clone());
        self.commit(next)?;

        Ok(shift)
    }

    /// Shallow-merge `patch`; the entry list is always kept.
    pub fn update_shift(&mut self, id: &str, patch: ShiftPatch) -> AppResult<bool> {
        let mut next = self.doc.clone();
        let Some(shift) = next.shifts.iter_mut().find(|s| s.id == id) else {
            return Ok(false);
        };

        if let Some(s) = patch.start_time {
            shift.start_time = s;
        }
        if let Some(e) = patch.end_time {
            shift.end_time = e;
        }
        if let Some(t) = patch.target_output {
            shift.target_output = t;
        }
        if let Some(m) = patch.material_id {
            shift.material_id = m;
        }
        if let Some(n) = patch.notes {
            shift.notes = n;
        }

        validate_window(&shift.start_time, &shift.end_time)?;

        self.commit(next)?;
        Ok(true)
    }

    pub fn delete_shift(&mut self, id: &str) -> AppResult<bool> {
        if self.get(id).is_none() {
            return Ok(false);
        }

        let mut next = self.doc.clone();
        next.shifts.retain(|s| s.id != id);
        self.commit(next)?;
        Ok(true)
    }

    /// Append an entry to shift `shift_id`. `None` if there is no such shift.
    pub fn add_entry(&mut self, shift_id: &str, new: NewShiftEntry) -> AppResult<Option<ShiftEntry>> {
        let mut next = self.doc.clone();
        let Some(shift) = next.shifts.iter_mut().find(|s| s.id == shift_id) else {
            return Ok(None);
        };

        let entry = ShiftEntry {
            id: new_id(),
            timestamp: new.timestamp,
            material_id: new.material_id,
            speed: new.speed,
            duration_minutes: new.duration_minutes,
            actual_output: new.actual_output,
            notes: new.notes,
        };
        shift.entries.push(entry.clone());

        self.commit(next)?;
        Ok(Some(entry))
    }

    fn commit(&mut self, next: ShiftsDocument) -> AppResult<()> {
        write_document(self.port, SHIFTS_KEY, &next)?;
        self.doc = next;
        Ok(())
    }
}
