// src/export/model.rs

use crate::core::shifts::valid_with_progress;
use crate::models::material::{MaterialSetting, describe_material};
use crate::models::run_entry::RunEntry;
use crate::models::shift::{Shift, ShiftEntry};
use crate::utils::date::{format_timestamp, parse_datetime, to_locale_string};
use crate::utils::formatting::fmt_percent;
use chrono::NaiveDateTime;
use serde::Serialize;

/// A shift as written by the display export. Not meant to be imported back.
#[derive(Serialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ShiftExport {
    pub id: String,
    pub start_time: String,
    pub end_time: String,
    pub target_output: f64,
    pub material_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub entries: Vec<ShiftEntry>,
    pub actual_output: f64,
    pub efficiency: String,
    pub is_active: bool,
    pub friendly_name: String,
}

#[derive(Serialize, Clone, Debug)]
pub struct ShiftExportDocument {
    pub shifts: Vec<ShiftExport>,
}

fn locale_or_raw(raw: &str) -> String {
    parse_datetime(raw)
        .map(|dt| to_locale_string(&dt))
        .unwrap_or_else(|| raw.to_string())
}

/// Every shift with valid dates, with progress and display formatting applied.
pub fn shift_export_document(shifts: &[Shift], now: NaiveDateTime) -> ShiftExportDocument {
    let shifts = valid_with_progress(shifts, now)
        .into_iter()
        .map(|p| ShiftExport {
            start_time: locale_or_raw(&p.shift.start_time),
            end_time: locale_or_raw(&p.shift.end_time),
            id: p.shift.id,
            target_output: p.shift.target_output,
            material_id: p.shift.material_id,
            notes: p.shift.notes,
            entries: p.shift.entries,
            actual_output: p.actual_output,
            efficiency: fmt_percent(p.efficiency),
            is_active: p.is_active,
            friendly_name: p.friendly_name,
        })
        .collect();

    ShiftExportDocument { shifts }
}

/// Flat run-history row for CSV / JSON.
#[derive(Serialize, Clone, Debug)]
pub struct RunExport {
    pub id: String,
    pub date: String,
    pub material: String,
    pub speed: f64,
    pub target_rate: f64,
    pub actual_output: Option<f64>,
    pub variance: Option<String>,
    pub notes: String,
}

pub fn run_export_rows(entries: &[RunEntry], materials: &[MaterialSetting]) -> Vec<RunExport> {
    entries
        .iter()
        .map(|e| RunExport {
            id: e.id.clone(),
            date: format_timestamp(e.timestamp),
            material: describe_material(materials.iter().find(|m| m.id == e.material_id)),
            speed: e.speed,
            target_rate: e.target_rate,
            actual_output: e.actual_output,
            variance: e.variance_percent().map(fmt_percent),
            notes: e.notes.clone().unwrap_or_default(),
        })
        .collect()
}
