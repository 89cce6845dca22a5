pub mod calc;
pub mod config;
pub mod export;
pub mod history;
pub mod init;
pub mod log;
pub mod logbook;
pub mod material;
pub mod shift;
pub mod track;

use crate::config::Config;
use crate::db::log::ttlog;
use crate::db::port::SqlitePort;
use crate::errors::{AppError, AppResult};
use crate::models::material::MaterialSetting;
use crate::store::MaterialRegistry;
use crate::ui::messages::warning;

pub(crate) fn open_port(cfg: &Config) -> AppResult<SqlitePort> {
    SqlitePort::open(&cfg.database)
}

/// Write an audit line; a failure here never fails the command.
pub(crate) fn audit(port: &SqlitePort, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(port.conn(), operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

/// Id of the material to use: explicit choice, then config default, then the first registered.
pub(crate) fn material_id_or_default(
    registry: &MaterialRegistry,
    requested: &Option<String>,
    cfg: &Config,
) -> Option<String> {
    requested
        .clone()
        .or_else(|| cfg.default_material.clone())
        .or_else(|| registry.list().first().map(|m| m.id.clone()))
}

/// Resolve a material that must exist (conversions need its constant).
pub(crate) fn require_material(
    registry: &MaterialRegistry,
    requested: &Option<String>,
    cfg: &Config,
) -> AppResult<MaterialSetting> {
    let id = material_id_or_default(registry, requested, cfg)
        .ok_or_else(|| AppError::InvalidMaterial("no materials configured".to_string()))?;

    registry
        .get(&id)
        .cloned()
        .ok_or(AppError::NotFound("Material", id))
}
