use crate::db::port::PersistencePort;
use crate::errors::{AppError, AppResult};
use crate::models::material::{MaterialPatch, MaterialSetting, Settings};
use crate::models::new_id;
use crate::store::schema::load_settings;
use crate::store::{SETTINGS_KEY, write_document};

fn ensure_positive(field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::InvalidMaterial(format!(
            "{field} must be greater than 0 (got {value})"
        )))
    }
}

/// The list of materials and their conversion constants.
///
/// Every stored constant is strictly positive, so conversions driven by a
/// registered material can never divide by zero. Removing a material leaves
/// records that point at it untouched.
pub struct MaterialRegistry<'a> {
    port: &'a dyn PersistencePort,
    doc: Settings,
}

impl<'a> MaterialRegistry<'a> {
    /// Load the saved materials, or the seed set if none were ever saved.
    pub fn open(port: &'a dyn PersistencePort) -> AppResult<Self> {
        let raw = port.load(SETTINGS_KEY)?;
        let doc = load_settings(raw.as_deref())?;
        Ok(Self { port, doc })
    }

    pub fn list(&self) -> &[MaterialSetting] {
        &self.doc.diameters
    }

    pub fn get(&self, id: &str) -> Option<&MaterialSetting> {
        self.doc.diameters.iter().find(|m| m.id == id)
    }

    /// Register a material. Duplicate diameters are allowed.
    pub fn add(&mut self, diameter: f64, constant: f64) -> AppResult<MaterialSetting> {
        ensure_positive("diameter", diameter)?;
        ensure_positive("constant", constant)?;

        let material = MaterialSetting::new(new_id(), diameter, constant);

        let mut next = self.doc.clone();
        next.diameters.push(material.clone());
        self.commit(next)?;

        Ok(material)
    }

    /// Shallow-merge `patch` into material `id`. Returns `false` if it does not exist.
    pub fn update(&mut self, id: &str, patch: MaterialPatch) -> AppResult<bool> {
        if let Some(d) = patch.diameter {
            ensure_positive("diameter", d)?;
        }
        if let Some(c) = patch.constant {
            ensure_positive("constant", c)?;
        }

        let mut next = self.doc.clone();
        let Some(material) = next.diameters.iter_mut().find(|m| m.id == id) else {
            return Ok(false);
        };

        if let Some(d) = patch.diameter {
            material.diameter = d;
        }
        if let Some(c) = patch.constant {
            material.constant = c;
        }

        self.commit(next)?;
        Ok(true)
    }

    pub fn remove(&mut self, id: &str) -> AppResult<bool> {
        if self.get(id).is_none() {
            return Ok(false);
        }

        let mut next = self.doc.clone();
        next.diameters.retain(|m| m.id != id);
        self.commit(next)?;
        Ok(true)
    }

    /// Replace the whole list with the seed materials.
    pub fn reset_to_defaults(&mut self) -> AppResult<()> {
        self.commit(Settings::default())
    }

    fn commit(&mut self, next: Settings) -> AppResult<()> {
        write_document(self.port, SETTINGS_KEY, &next)?;
        self.doc = next;
        Ok(())
    }
}
