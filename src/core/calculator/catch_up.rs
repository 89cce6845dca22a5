//! Catch-up redistribution over a tracking period.
//!
//! Every cell after the last measured one gets the speed needed to hit its
//! own target plus an even share of the shortfall accumulated so far. A
//! surplus is never spent against later hours: the deficit is floored at 0.

use crate::core::calculator::conversion::speed_from_rate;
use crate::errors::AppResult;
use crate::models::hourly_cell::HourlyCell;

/// Index of the last cell with a measured output.
pub fn last_entered_index(cells: &[HourlyCell]) -> Option<usize> {
    cells.iter().rposition(HourlyCell::is_measured)
}

/// Full recompute of `required_rate` for every cell.
///
/// With nothing measured the cells come back unchanged. Without a material
/// constant the future cells are left without a required rate.
pub fn recompute_catch_up(cells: &[HourlyCell], constant: Option<f64>) -> AppResult<Vec<HourlyCell>> {
    let Some(last) = last_entered_index(cells) else {
        return Ok(cells.to_vec());
    };

    let n = cells.len();
    let mut out = Vec::with_capacity(n);
    let mut actual_so_far: f64 = 0.0;
    let mut target_so_far: f64 = 0.0;

    for (i, cell) in cells.iter().enumerate() {
        let mut next = cell.clone();

        if i <= last {
            next.required_rate = None;
        } else {
            let remaining = (n - i) as f64;
            let deficit = (target_so_far - actual_so_far).max(0.0);
            let per_minute = (cell.target + deficit / remaining) / 60.0;

            next.required_rate = match constant {
                Some(c) => Some(speed_from_rate(per_minute, c)?),
                None => None,
            };
        }

        actual_so_far += cell.actual.unwrap_or(0.0);
        target_so_far += cell.target;
        out.push(next);
    }

    Ok(out)
}

/// Average speed needed over the whole period, with no look-back deficit.
pub fn catch_up_speed(cells: &[HourlyCell], constant: f64) -> AppResult<f64> {
    if cells.is_empty() {
        return Ok(0.0);
    }
    let total_target = cells.iter().fold(0.0, |acc, c| acc + c.target);
    speed_from_rate(total_target / (cells.len() as f64 * 60.0), constant)
}

/// Period totals shown under the hourly table.
#[derive(Debug, Clone, PartialEq)]
pub struct CatchUpSummary {
    pub total_target: f64,
    pub total_actual: f64,
    pub total_variance: f64,
    /// Present only when the period is behind target and a material is selected.
    pub catch_up_speed: Option<f64>,
}

impl CatchUpSummary {
    pub fn from_cells(cells: &[HourlyCell], constant: Option<f64>) -> AppResult<Self> {
        let total_target = cells.iter().fold(0.0, |acc, c| acc + c.target);
        let total_actual = cells.iter().fold(0.0, |acc, c| acc + c.actual.unwrap_or(0.0));
        let total_variance = total_actual - total_target;

        let catch_up_speed = match constant {
            Some(c) if total_variance < 0.0 => Some(catch_up_speed(cells, c)?),
            _ => None,
        };

        Ok(Self {
            total_target,
            total_actual,
            total_variance,
            catch_up_speed,
        })
    }

    pub fn is_behind(&self) -> bool {
        self.total_variance < 0.0
    }
}
