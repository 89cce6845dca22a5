use serde::{Deserialize, Serialize};

/// One recorded calculation: a speed, the rate it should produce and,
/// once measured, the output actually achieved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunEntry {
    pub id: String,
    pub timestamp: i64,
    #[serde(alias = "diameterId")]
    pub material_id: String,
    pub speed: f64,
    #[serde(alias = "targetLogs")]
    pub target_rate: f64,
    #[serde(alias = "actualLogs", default)]
    pub actual_output: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl RunEntry {
    /// Deviation from target in percent, only once measured.
    pub fn variance_percent(&self) -> Option<f64> {
        match self.actual_output {
            Some(actual) if self.target_rate > 0.0 => {
                Some((actual - self.target_rate) / self.target_rate * 100.0)
            }
            _ => None,
        }
    }
}

/// Fields supplied by the caller when recording a run.
#[derive(Debug, Clone)]
pub struct NewRunEntry {
    pub material_id: String,
    pub speed: f64,
    pub target_rate: f64,
    pub actual_output: Option<f64>,
    pub notes: Option<String>,
}

/// Shallow-merge update. `Some(None)` clears an optional field.
#[derive(Debug, Clone, Default)]
pub struct RunEntryPatch {
    pub material_id: Option<String>,
    pub speed: Option<f64>,
    pub target_rate: Option<f64>,
    pub actual_output: Option<Option<f64>>,
    pub notes: Option<Option<String>>,
}

/// Persisted run history document, newest entry first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunHistory {
    #[serde(default)]
    pub entries: Vec<RunEntry>,
}
