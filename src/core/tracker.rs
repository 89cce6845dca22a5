//! Hourly tracking session.
//!
//! Holds the cells of one period and the constant of the selected material.
//! Changes go through the setters so the required rates stay in step with
//! what has been measured.

use crate::core::calculator::catch_up::{CatchUpSummary, last_entered_index, recompute_catch_up};
use crate::errors::{AppError, AppResult};
use crate::models::hourly_cell::HourlyCell;

#[derive(Debug, Clone)]
pub struct HourlyTracker {
    cells: Vec<HourlyCell>,
    constant: Option<f64>,
}

impl HourlyTracker {
    pub fn new(hours: usize, hourly_target: f64, constant: Option<f64>) -> Self {
        Self {
            cells: HourlyCell::period(hours, hourly_target),
            constant,
        }
    }

    pub fn cells(&self) -> &[HourlyCell] {
        &self.cells
    }

    pub fn constant(&self) -> Option<f64> {
        self.constant
    }

    /// Switch material; `None` when the selected material no longer exists.
    pub fn select_material(&mut self, constant: Option<f64>) -> AppResult<()> {
        self.constant = constant;
        self.recompute()
    }

    /// Set the target of the 1-based `hour`.
    ///
    /// Editing an hour that is already behind the last measurement only
    /// refreshes its variance; later required rates follow on the next change.
    pub fn set_target(&mut self, hour: usize, target: f64) -> AppResult<()> {
        let idx = self.index_of(hour)?;
        let last = last_entered_index(&self.cells);

        let cell = &mut self.cells[idx];
        cell.target = target;
        cell.refresh_variance();

        match last {
            Some(last) if idx <= last => Ok(()),
            _ => self.recompute(),
        }
    }

    /// Record (or clear with `None`) the measured output of `hour`.
    pub fn set_actual(&mut self, hour: usize, actual: Option<f64>) -> AppResult<()> {
        let idx = self.index_of(hour)?;
        let cell = &mut self.cells[idx];
        cell.actual = actual;
        cell.refresh_variance();
        self.recompute()
    }

    pub fn set_notes(&mut self, hour: usize, notes: impl Into<String>) -> AppResult<()> {
        let idx = self.index_of(hour)?;
        self.cells[idx].notes = notes.into();
        Ok(())
    }

    pub fn summary(&self) -> AppResult<CatchUpSummary> {
        CatchUpSummary::from_cells(&self.cells, self.constant)
    }

    fn recompute(&mut self) -> AppResult<()> {
        self.cells = recompute_catch_up(&self.cells, self.constant)?;
        Ok(())
    }

    fn index_of(&self, hour: usize) -> AppResult<usize> {
        if hour == 0 || hour > self.cells.len() {
            return Err(AppError::InvalidHour(hour));
        }
        Ok(hour - 1)
    }
}
