use crate::cli::commands::{material_id_or_default, open_port};
use crate::cli::parser::Commands;
use crate::cli::validate::{non_negative, parse_optional_list};
use crate::config::Config;
use crate::core::tracker::HourlyTracker;
use crate::errors::{AppError, AppResult};
use crate::store::MaterialRegistry;
use crate::ui::messages::{alert, header, success, warning};
use crate::utils::colors::{color_for_variance, colorize_optional, paint};
use crate::utils::formatting::{fmt_num, fmt_opt, fmt_signed};
use crate::utils::table::{Column, Table};

/// Lists longer than the period are an error.
fn check_len(field: &str, values: &[Option<f64>], hours: usize) -> AppResult<()> {
    if values.len() > hours {
        return Err(AppError::InvalidNumber(format!(
            "{field}: {} values given for a {hours}-hour period",
            values.len()
        )));
    }
    Ok(())
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Track {
        material,
        hours,
        target,
        targets,
        actuals,
    } = cmd
    else {
        return Ok(());
    };

    let port = open_port(cfg)?;
    let registry = MaterialRegistry::open(&port)?;

    let hours = hours.unwrap_or(cfg.period_hours);
    let hourly_target = non_negative("target", target.unwrap_or(cfg.hourly_target))?;

    let selected = material_id_or_default(&registry, material, cfg)
        .and_then(|id| registry.get(&id).cloned());
    if selected.is_none() {
        warning("Selected material not found: required speeds cannot be calculated.");
    }

    let mut tracker = HourlyTracker::new(hours, hourly_target, selected.as_ref().map(|m| m.constant));

    if let Some(list) = targets {
        let values = parse_optional_list("targets", list)?;
        check_len("targets", &values, hours)?;
        for (i, value) in values.into_iter().enumerate() {
            if let Some(t) = value {
                tracker.set_target(i + 1, t)?;
            }
        }
    }

    if let Some(list) = actuals {
        let values = parse_optional_list("actuals", list)?;
        check_len("actuals", &values, hours)?;
        for (i, value) in values.into_iter().enumerate() {
            if value.is_some() {
                tracker.set_actual(i + 1, value)?;
            }
        }
    }

    let title = match &selected {
        Some(m) => format!("Hourly tracking, {} (constant {})", m.label(), m.constant),
        None => "Hourly tracking, no material".to_string(),
    };
    header(title);

    let mut table = Table::new(vec![
        Column::new("HOUR", 6),
        Column::new("TARGET", 8),
        Column::new("ACTUAL", 8),
        Column::new("VARIANCE", 10),
        Column::new("REQ. SPEED", 12),
        Column::new("LOGS/HR", 9),
        Column::new("NOTES", 20),
    ]);

    for cell in tracker.cells() {
        let variance = if cell.is_measured() {
            paint(&fmt_signed(cell.variance), color_for_variance(cell.variance))
        } else {
            colorize_optional("-")
        };

        let logs_per_hour = match (cell.required_rate, tracker.constant()) {
            (Some(speed), Some(c)) => fmt_num(speed * c * 60.0),
            _ => "-".to_string(),
        };

        table.add_row(vec![
            cell.hour.to_string(),
            fmt_num(cell.target),
            colorize_optional(&fmt_opt(cell.actual)),
            variance,
            colorize_optional(&fmt_opt(cell.required_rate)),
            colorize_optional(&logs_per_hour),
            cell.notes.clone(),
        ]);
    }
    print!("{}", table.render(&cfg.separator_char));

    let summary = tracker.summary()?;
    println!(
        "\nTotal target: {} | Total actual: {} | Variance: {}",
        fmt_num(summary.total_target),
        fmt_num(summary.total_actual),
        paint(
            &fmt_signed(summary.total_variance),
            color_for_variance(summary.total_variance)
        )
    );

    if summary.is_behind() {
        let speed = summary
            .catch_up_speed
            .map(|s| format!(" Average speed needed over the period: {} RPM.", fmt_num(s)))
            .unwrap_or_default();
        alert(
            "Behind target",
            format!("{} logs short.{}", fmt_num(-summary.total_variance), speed),
        );
    } else {
        success("On target.");
    }

    Ok(())
}
