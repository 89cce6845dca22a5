use crate::cli::commands::{audit, open_port, require_material};
use crate::cli::parser::{Commands, HistoryAction};
use crate::cli::validate::non_negative;
use crate::config::Config;
use crate::core::history::{hit_rate, hourly_profile};
use crate::errors::{AppError, AppResult};
use crate::models::material::describe_material;
use crate::models::run_entry::{NewRunEntry, RunEntryPatch};
use crate::store::{MaterialRegistry, RunHistoryStore};
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{color_for_variance, colorize_optional, paint};
use crate::utils::date::format_timestamp;
use crate::utils::formatting::{fmt_num, fmt_opt, fmt_percent};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::History { action } = cmd else {
        return Ok(());
    };

    let port = open_port(cfg)?;
    let mut history = RunHistoryStore::open(&port)?;

    match action {
        HistoryAction::List { limit, profile } => {
            if history.entries().is_empty() {
                info("No runs recorded yet.");
                return Ok(());
            }

            if *profile {
                header("Average per hour of day");
                let mut table = Table::new(vec![
                    Column::new("HOUR", 6),
                    Column::new("RUNS", 6),
                    Column::new("TARGET", 10),
                    Column::new("ACTUAL", 10),
                ]);
                for b in hourly_profile(history.entries()).iter().filter(|b| b.count > 0) {
                    table.add_row(vec![
                        format!("{:02}:00", b.hour),
                        b.count.to_string(),
                        fmt_num(b.target),
                        fmt_num(b.actual),
                    ]);
                }
                print!("{}", table.render(&cfg.separator_char));
                return Ok(());
            }

            let registry = MaterialRegistry::open(&port)?;
            let limit = limit.unwrap_or(cfg.history_limit);

            let mut table = Table::new(vec![
                Column::new("ID", 38),
                Column::new("DATE", 17),
                Column::new("MATERIAL", 9),
                Column::new("SPEED", 8),
                Column::new("TARGET", 8),
                Column::new("ACTUAL", 8),
                Column::new("VAR", 8),
                Column::new("NOTES", 20),
            ]);

            for e in history.recent(limit) {
                let variance = match e.variance_percent() {
                    Some(v) => paint(&fmt_percent(v), color_for_variance(v)),
                    None => colorize_optional("-"),
                };
                table.add_row(vec![
                    e.id.clone(),
                    format_timestamp(e.timestamp),
                    describe_material(registry.get(&e.material_id)),
                    fmt_num(e.speed),
                    fmt_num(e.target_rate),
                    colorize_optional(&fmt_opt(e.actual_output)),
                    variance,
                    e.notes.clone().unwrap_or_default(),
                ]);
            }
            print!("{}", table.render(&cfg.separator_char));

            if let Some(rate) = hit_rate(history.entries()) {
                println!("\nMeasured runs on target: {}", fmt_percent(rate));
            }
        }

        HistoryAction::Add {
            material,
            speed,
            target,
            actual,
            notes,
        } => {
            let registry = MaterialRegistry::open(&port)?;
            let m = require_material(&registry, material, cfg)?;

            let entry = history.add_entry(NewRunEntry {
                material_id: m.id.clone(),
                speed: non_negative("speed", *speed)?,
                target_rate: non_negative("target", *target)?,
                actual_output: actual.map(|a| non_negative("actual", a)).transpose()?,
                notes: notes.clone(),
            })?;

            success(format!("Run recorded (id {}).", entry.id));
            audit(&port, "add", "history", &format!("{} at {}", m.label(), fmt_num(entry.speed)));
        }

        HistoryAction::Update {
            id,
            actual,
            clear_actual,
            notes,
        } => {
            let actual_output = if *clear_actual {
                Some(None)
            } else {
                actual.map(|a| non_negative("actual", a).map(Some)).transpose()?
            };

            let patch = RunEntryPatch {
                actual_output,
                notes: notes.clone().map(|n| Some(n).filter(|s| !s.is_empty())),
                ..Default::default()
            };

            if !history.update_entry(id, patch)? {
                return Err(AppError::NotFound("Run", id.clone()));
            }
            success(format!("Run {} updated.", id));
            audit(&port, "edit", "history", id);
        }

        HistoryAction::Del { id } => {
            if !history.delete_entry(id)? {
                return Err(AppError::NotFound("Run", id.clone()));
            }
            success(format!("Run {} deleted.", id));
            audit(&port, "del", "history", id);
        }
    }

    Ok(())
}
