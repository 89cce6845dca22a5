//! Speed <-> output rate conversion.
//!
//! Both directions round to two decimals and that rounded value is what gets
//! displayed, stored and fed into any further calculation.

use crate::errors::{AppError, AppResult};

/// Round half-up to 2 decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Output per minute produced by running at `speed`.
pub fn rate_from_speed(speed: f64, constant: f64) -> f64 {
    round2(speed * constant)
}

/// Speed needed to produce `target_rate` per minute.
pub fn speed_from_rate(target_rate: f64, constant: f64) -> AppResult<f64> {
    if constant == 0.0 {
        return Err(AppError::DivisionByZero);
    }
    Ok(round2(target_rate / constant))
}
