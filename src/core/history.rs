//! Read-side helpers over the run history.

use crate::models::run_entry::RunEntry;
use crate::utils::date::hour_of_day;

/// Average target and actual of the runs recorded in one hour of the day.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HourProfile {
    pub hour: u32,
    pub target: f64,
    pub actual: f64,
    pub count: usize,
}

/// 24 buckets, one per local hour of day. Unmeasured runs count as 0 actual.
pub fn hourly_profile(entries: &[RunEntry]) -> Vec<HourProfile> {
    let mut buckets: Vec<HourProfile> = (0..24)
        .map(|hour| HourProfile {
            hour,
            ..Default::default()
        })
        .collect();

    for entry in entries {
        let Some(hour) = hour_of_day(entry.timestamp) else {
            continue;
        };
        let b = &mut buckets[hour as usize];
        b.target += entry.target_rate;
        b.actual += entry.actual_output.unwrap_or(0.0);
        b.count += 1;
    }

    for b in &mut buckets {
        if b.count > 0 {
            b.target /= b.count as f64;
            b.actual /= b.count as f64;
        }
    }

    buckets
}

/// Share of measured runs that met or beat their target, in percent.
pub fn hit_rate(entries: &[RunEntry]) -> Option<f64> {
    let measured: Vec<&RunEntry> = entries.iter().filter(|e| e.actual_output.is_some()).collect();
    if measured.is_empty() {
        return None;
    }
    let hits = measured
        .iter()
        .filter(|e| e.actual_output.unwrap_or(0.0) >= e.target_rate)
        .count();
    Some(hits as f64 / measured.len() as f64 * 100.0)
}
