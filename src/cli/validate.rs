//! Input checks done before anything reaches the engine or the stores.

use crate::errors::{AppError, AppResult};

pub fn non_negative(field: &str, value: f64) -> AppResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(AppError::InvalidNumber(format!(
            "{field} must be a number >= 0 (got {value})"
        )))
    }
}

pub fn positive(field: &str, value: f64) -> AppResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AppError::InvalidNumber(format!(
            "{field} must be a number > 0 (got {value})"
        )))
    }
}

/// Parse a comma separated list where blank items are `None`.
///
/// `"500,,510"` → `[Some(500), None, Some(510)]`.
pub fn parse_optional_list(field: &str, list: &str) -> AppResult<Vec<Option<f64>>> {
    list.split(',')
        .map(str::trim)
        .map(|item| {
            if item.is_empty() || item == "-" {
                return Ok(None);
            }
            let value: f64 = item.parse().map_err(|_| {
                AppError::InvalidNumber(format!("{field}: '{item}' is not a number"))
            })?;
            non_negative(field, value).map(Some)
        })
        .collect()
}
