use serde::{Deserialize, Serialize};

/// Current schema version of the persisted shifts document.
pub const SHIFTS_SCHEMA_VERSION: u32 = 1;

/// A bounded production window with an aggregate target.
///
/// Start and end are kept as the ISO strings the operator entered so that a
/// malformed value survives a round trip instead of failing the whole load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
    pub id: String,
    #[serde(alias = "startDateTime")]
    pub start_time: String,
    #[serde(alias = "endDateTime")]
    pub end_time: String,
    #[serde(alias = "targetLogs")]
    pub target_output: f64,
    #[serde(alias = "diameterId")]
    pub material_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub entries: Vec<ShiftEntry>,
}

/// A production record inside a shift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftEntry {
    pub id: String,
    pub timestamp: i64,
    #[serde(alias = "diameterId")]
    pub material_id: String,
    pub speed: f64,
    #[serde(alias = "duration")]
    pub duration_minutes: u32,
    #[serde(alias = "actualLogs")]
    pub actual_output: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewShift {
    pub start_time: String,
    pub end_time: String,
    pub target_output: f64,
    pub material_id: String,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ShiftPatch {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub target_output: Option<f64>,
    pub material_id: Option<String>,
    pub notes: Option<Option<String>>,
}

#[derive(Debug, Clone)]
pub struct NewShiftEntry {
    pub timestamp: i64,
    pub material_id: String,
    pub speed: f64,
    pub duration_minutes: u32,
    pub actual_output: f64,
    pub notes: Option<String>,
}

/// A shift with its derived progress fields. Never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftWithProgress {
    #[serde(flatten)]
    pub shift: Shift,
    pub actual_output: f64,
    pub efficiency: f64,
    pub is_active: bool,
    pub friendly_name: String,
}

/// Persisted shifts document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShiftsDocument {
    pub version: u32,
    pub shifts: Vec<Shift>,
}

impl Default for ShiftsDocument {
    fn default() -> Self {
        Self {
            version: SHIFTS_SCHEMA_VERSION,
            shifts: Vec::new(),
        }
    }
}
