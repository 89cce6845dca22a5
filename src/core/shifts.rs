//! Shift aggregation: progress, efficiency, labels and categorisation.

use crate::models::material::{MaterialSetting, describe_material};
use crate::models::shift::{Shift, ShiftEntry, ShiftWithProgress};
use crate::utils::date::parse_datetime;
use chrono::NaiveDateTime;

/// Sum of the output recorded in the shift's entries.
pub fn actual_output(shift: &Shift) -> f64 {
    shift.entries.iter().fold(0.0, |acc, e| acc + e.actual_output)
}

/// Percentage of the target reached, 0 when there is no target.
pub fn efficiency(shift: &Shift) -> f64 {
    if shift.target_output > 0.0 {
        actual_output(shift) / shift.target_output * 100.0
    } else {
        0.0
    }
}

/// Parsed `(start, end)` or `None` when either boundary is malformed.
pub fn bounds(shift: &Shift) -> Option<(NaiveDateTime, NaiveDateTime)> {
    Some((
        parse_datetime(&shift.start_time)?,
        parse_datetime(&shift.end_time)?,
    ))
}

pub fn is_active(shift: &Shift, now: NaiveDateTime) -> bool {
    bounds(shift).is_some_and(|(start, end)| start <= now && now <= end)
}

fn day_label(at: NaiveDateTime, now: NaiveDateTime) -> String {
    let time = at.format("%-I:%M %p");
    match (at.date() - now.date()).num_days() {
        0 => format!("Today at {time}"),
        1 => format!("Tomorrow at {time}"),
        -1 => format!("Yesterday at {time}"),
        _ => format!("{} at {time}", at.format("%a, %b %-d")),
    }
}

/// e.g. `Today at 2:00 PM – Tomorrow at 2:00 AM`.
///
/// Start and end get their relative day independently.
pub fn friendly_name(start: NaiveDateTime, end: NaiveDateTime, now: NaiveDateTime) -> String {
    format!("{} – {}", day_label(start, now), day_label(end, now))
}

/// Attach the derived progress fields.
pub fn with_progress(shift: &Shift, now: NaiveDateTime) -> ShiftWithProgress {
    let friendly_name = match bounds(shift) {
        Some((start, end)) => friendly_name(start, end, now),
        None => "Invalid schedule".to_string(),
    };

    ShiftWithProgress {
        shift: shift.clone(),
        actual_output: actual_output(shift),
        efficiency: efficiency(shift),
        is_active: is_active(shift, now),
        friendly_name,
    }
}

/// Every shift with valid dates, with progress, in stored order.
pub fn valid_with_progress(shifts: &[Shift], now: NaiveDateTime) -> Vec<ShiftWithProgress> {
    shifts
        .iter()
        .filter(|s| bounds(s).is_some())
        .map(|s| with_progress(s, now))
        .collect()
}

#[derive(Debug, Clone, Default)]
pub struct ShiftBuckets {
    pub current: Vec<ShiftWithProgress>,
    pub upcoming: Vec<ShiftWithProgress>,
    pub historical: Vec<ShiftWithProgress>,
}

/// Split shifts into current, upcoming and historical views.
///
/// The three views are independent filters over the whole set. Shifts whose
/// dates do not parse appear in none of them.
pub fn classify(shifts: &[Shift], now: NaiveDateTime) -> ShiftBuckets {
    let dated: Vec<(NaiveDateTime, NaiveDateTime, &Shift)> = shifts
        .iter()
        .filter_map(|s| bounds(s).map(|(start, end)| (start, end, s)))
        .collect();

    let pick = |keep: &dyn Fn(NaiveDateTime, NaiveDateTime) -> bool| {
        let mut v: Vec<(NaiveDateTime, ShiftWithProgress)> = dated
            .iter()
            .filter(|(start, end, _)| keep(*start, *end))
            .map(|(start, _, s)| (*start, with_progress(s, now)))
            .collect();
        v.sort_by_key(|(start, _)| *start);
        v
    };

    let current = pick(&|start, end| start <= now && now <= end);
    let upcoming = pick(&|start, _| start > now);
    let mut historical = pick(&|_, end| end < now);
    historical.reverse();

    ShiftBuckets {
        current: current.into_iter().map(|(_, s)| s).collect(),
        upcoming: upcoming.into_iter().map(|(_, s)| s).collect(),
        historical: historical.into_iter().map(|(_, s)| s).collect(),
    }
}

/// Mean efficiency of the given shifts, 0 when there are none.
pub fn average_efficiency(shifts: &[ShiftWithProgress]) -> f64 {
    if shifts.is_empty() {
        return 0.0;
    }
    shifts.iter().fold(0.0, |acc, s| acc + s.efficiency) / shifts.len() as f64
}

/// Output and run time of one material within a shift.
#[derive(Debug, Clone)]
pub struct MaterialTotals {
    pub material_id: String,
    pub label: String,
    pub total_output: f64,
    pub total_minutes: u32,
    /// Most recent first.
    pub entries: Vec<ShiftEntry>,
}

/// Group a shift's entries by material, in order of first appearance.
pub fn material_breakdown(shift: &Shift, materials: &[MaterialSetting]) -> Vec<MaterialTotals> {
    let mut groups: Vec<MaterialTotals> = Vec::new();

    for entry in &shift.entries {
        let pos = match groups.iter().position(|g| g.material_id == entry.material_id) {
            Some(pos) => pos,
            None => {
                let material = materials.iter().find(|m| m.id == entry.material_id);
                groups.push(MaterialTotals {
                    material_id: entry.material_id.clone(),
                    label: describe_material(material),
                    total_output: 0.0,
                    total_minutes: 0,
                    entries: Vec::new(),
                });
                groups.len() - 1
            }
        };

        let group = &mut groups[pos];
        group.total_output += entry.actual_output;
        group.total_minutes += entry.duration_minutes;
        group.entries.push(entry.clone());
    }

    for group in &mut groups {
        group.entries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    }

    groups
}
