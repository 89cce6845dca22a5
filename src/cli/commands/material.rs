use crate::cli::commands::{audit, open_port};
use crate::cli::parser::{Commands, MaterialAction};
use crate::cli::validate::positive;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::material::MaterialPatch;
use crate::store::MaterialRegistry;
use crate::ui::messages::{info, success};
use crate::utils::fmt_num;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Material { action } = cmd else {
        return Ok(());
    };

    let port = open_port(cfg)?;
    let mut registry = MaterialRegistry::open(&port)?;

    match action {
        MaterialAction::List => {
            if registry.list().is_empty() {
                info("No materials configured. Use `logcalc material reset` to restore the defaults.");
                return Ok(());
            }

            let mut table = Table::new(vec![
                Column::new("ID", 38),
                Column::new("DIAMETER", 10),
                Column::new("CONSTANT", 10),
            ]);
            for m in registry.list() {
                table.add_row(vec![m.id.clone(), m.label(), m.constant.to_string()]);
            }
            print!("{}", table.render(&cfg.separator_char));
        }

        MaterialAction::Add { diameter, constant } => {
            let diameter = positive("diameter", *diameter)?;
            let constant = positive("constant", *constant)?;

            let m = registry.add(diameter, constant)?;
            success(format!(
                "Material {} added (id {}, constant {}).",
                m.label(),
                m.id,
                m.constant
            ));
            audit(&port, "add", "material", &format!("{} constant {}", m.label(), m.constant));
        }

        MaterialAction::Update {
            id,
            diameter,
            constant,
        } => {
            let patch = MaterialPatch {
                diameter: diameter.map(|d| positive("diameter", d)).transpose()?,
                constant: constant.map(|c| positive("constant", c)).transpose()?,
            };

            if !registry.update(id, patch)? {
                return Err(AppError::NotFound("Material", id.clone()));
            }
            success(format!("Material {} updated.", id));
            audit(&port, "edit", "material", id);
        }

        MaterialAction::Del { id } => {
            if !registry.remove(id)? {
                return Err(AppError::NotFound("Material", id.clone()));
            }
            success(format!(
                "Material {} deleted. Records using it now show as Unknown.",
                id
            ));
            audit(&port, "del", "material", id);
        }

        MaterialAction::Reset => {
            registry.reset_to_defaults()?;
            let labels: Vec<String> = registry
                .list()
                .iter()
                .map(|m| format!("{} ({})", m.label(), fmt_num(m.constant)))
                .collect();
            success(format!("Materials reset to defaults: {}", labels.join(", ")));
            audit(&port, "reset", "material", "Materials reset to defaults");
        }
    }

    Ok(())
}
