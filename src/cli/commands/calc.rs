use crate::cli::commands::{audit, open_port, require_material};
use crate::cli::parser::{CalcAction, Commands};
use crate::cli::validate::non_negative;
use crate::config::Config;
use crate::db::SqlitePort;
use crate::core::calculator::{forecast, forecast_total, rate_from_speed, speed_from_rate};
use crate::errors::AppResult;
use crate::models::material::MaterialSetting;
use crate::models::run_entry::NewRunEntry;
use crate::store::{MaterialRegistry, RunHistoryStore};
use crate::ui::messages::{header, success};
use crate::utils::date;
use crate::utils::fmt_num;
use crate::utils::table::{Column, Table};
use chrono::Duration;

fn record(
    port: &SqlitePort,
    material: &MaterialSetting,
    speed: f64,
    target_rate: f64,
    notes: &Option<String>,
) -> AppResult<()> {
    let mut history = RunHistoryStore::open(port)?;
    let entry = history.add_entry(NewRunEntry {
        material_id: material.id.clone(),
        speed,
        target_rate,
        actual_output: None,
        notes: notes.clone(),
    })?;
    success(format!("Recorded in history (id {}).", entry.id));
    audit(
        port,
        "add",
        "history",
        &format!("{} at {} → {}/min", material.label(), fmt_num(speed), fmt_num(target_rate)),
    );
    Ok(())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Calc { action } = cmd else {
        return Ok(());
    };

    let port = open_port(cfg)?;
    let registry = MaterialRegistry::open(&port)?;

    match action {
        CalcAction::Rate {
            material,
            speed,
            record: save,
            notes,
        } => {
            let m = require_material(&registry, material, cfg)?;
            let speed = non_negative("speed", *speed)?;
            let rate = rate_from_speed(speed, m.constant);

            println!(
                "{} at {} RPM → {} per minute ({} per hour)",
                m.label(),
                fmt_num(speed),
                fmt_num(rate),
                fmt_num(rate * 60.0)
            );

            if *save {
                record(&port, &m, speed, rate, notes)?;
            }
        }

        CalcAction::Speed {
            material,
            rate,
            record: save,
            notes,
        } => {
            let m = require_material(&registry, material, cfg)?;
            let rate = non_negative("rate", *rate)?;
            let speed = speed_from_rate(rate, m.constant)?;

            println!(
                "{} for {} per minute → {} RPM",
                m.label(),
                fmt_num(rate),
                fmt_num(speed)
            );

            if *save {
                record(&port, &m, speed, rate, notes)?;
            }
        }

        CalcAction::Forecast {
            material,
            speed,
            hours,
        } => {
            let m = require_material(&registry, material, cfg)?;
            let speed = non_negative("speed", *speed)?;
            let hours = hours.unwrap_or(cfg.period_hours);
            let rate = rate_from_speed(speed, m.constant);
            let rows = forecast(rate, hours);

            header(format!("{}-hour production forecast", hours));
            println!(
                "Diameter: {} | Speed: {} RPM | Output: {:.2}/min | Total: {}\n",
                m.label(),
                fmt_num(speed),
                rate,
                forecast_total(&rows)
            );

            let start = date::now();
            let mut table = Table::new(vec![
                Column::new("HOUR", 8),
                Column::new("TARGET", 10),
                Column::new("CUMULATIVE", 12),
                Column::new("TIME", 10),
            ]);
            for row in &rows {
                let at = start + Duration::hours(row.hour as i64);
                table.add_row(vec![
                    format!("Hour {}", row.hour),
                    row.target.to_string(),
                    row.cumulative.to_string(),
                    at.format("%-I:%M %p").to_string(),
                ]);
            }
            print!("{}", table.render(&cfg.separator_char));
            println!("\nAssumes constant speed with no downtime or breaks.");
        }
    }

    Ok(())
}
