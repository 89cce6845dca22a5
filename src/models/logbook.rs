use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Current schema version of the persisted logbook document.
pub const LOGBOOK_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogbookCategory {
    Maintenance,
    Issue,
    Solution,
    Observation,
    Other,
}

impl LogbookCategory {
    pub const ALL: [LogbookCategory; 5] = [
        LogbookCategory::Maintenance,
        LogbookCategory::Issue,
        LogbookCategory::Solution,
        LogbookCategory::Observation,
        LogbookCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LogbookCategory::Maintenance => "maintenance",
            LogbookCategory::Issue => "issue",
            LogbookCategory::Solution => "solution",
            LogbookCategory::Observation => "observation",
            LogbookCategory::Other => "other",
        }
    }

    /// Parse user input, case-insensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "maintenance" => Some(LogbookCategory::Maintenance),
            "issue" => Some(LogbookCategory::Issue),
            "solution" => Some(LogbookCategory::Solution),
            "observation" => Some(LogbookCategory::Observation),
            "other" => Some(LogbookCategory::Other),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageKind {
    Upload,
    Camera,
}

impl ImageKind {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "upload" => Some(ImageKind::Upload),
            "camera" => Some(ImageKind::Camera),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogbookImage {
    pub id: String,
    /// Data URL or reference to the stored picture.
    pub url: String,
    #[serde(rename = "type")]
    pub kind: ImageKind,
    pub timestamp: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogbookEntry {
    pub id: String,
    pub timestamp: i64,
    pub title: String,
    pub content: String,
    pub category: LogbookCategory,
    #[serde(default)]
    pub tags: BTreeSet<String>,
    pub images: Vec<LogbookImage>,
    #[serde(alias = "diameterId", default, skip_serializing_if = "Option::is_none")]
    pub material_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
}

#[derive(Debug, Clone)]
pub struct NewLogbookEntry {
    pub title: String,
    pub content: String,
    pub category: LogbookCategory,
    pub tags: BTreeSet<String>,
    pub material_id: Option<String>,
    pub speed: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct LogbookPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub category: Option<LogbookCategory>,
    pub tags: Option<BTreeSet<String>>,
    pub material_id: Option<Option<String>>,
    pub speed: Option<Option<f64>>,
}

/// Persisted logbook document, newest entry first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogbookDocument {
    pub version: u32,
    pub entries: Vec<LogbookEntry>,
}

impl Default for LogbookDocument {
    fn default() -> Self {
        Self {
            version: LOGBOOK_SCHEMA_VERSION,
            entries: Vec::new(),
        }
    }
}
