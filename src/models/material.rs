use serde::{Deserialize, Serialize};

/// A material the winder can run, with the constant that maps speed to output rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialSetting {
    pub id: String,
    pub diameter: f64,
    pub constant: f64,
}

impl MaterialSetting {
    pub fn new(id: impl Into<String>, diameter: f64, constant: f64) -> Self {
        Self {
            id: id.into(),
            diameter,
            constant,
        }
    }

    /// Label used in tables, e.g. `105mm`.
    pub fn label(&self) -> String {
        format!("{}mm", self.diameter)
    }
}

/// Partial update applied with shallow-merge semantics.
#[derive(Debug, Clone, Default)]
pub struct MaterialPatch {
    pub diameter: Option<f64>,
    pub constant: Option<f64>,
}

/// Persisted settings document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub diameters: Vec<MaterialSetting>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            diameters: vec![
                MaterialSetting::new("1", 105.0, 0.04198),
                MaterialSetting::new("2", 112.0, 0.04198),
            ],
        }
    }
}

/// Display value for a possibly dangling material reference.
pub fn describe_material(material: Option<&MaterialSetting>) -> String {
    material
        .map(MaterialSetting::label)
        .unwrap_or_else(|| "Unknown".to_string())
}
