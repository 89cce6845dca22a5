use crate::db::log::{LogRow, load_log};
use crate::errors::{AppError, AppResult};
use ansi_term::Colour;
use regex::Regex;
use rusqlite::Connection;

const MAX_OP_WIDTH: usize = 60;

fn strip_ansi(re: &Regex, s: &str) -> String {
    re.replace_all(s, "").into_owned()
}

/// ANSI colour for an audit operation.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" | "reset" => Colour::Red,
        "edit" => Colour::Yellow,
        "migration_applied" => Colour::Purple,
        "export" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn op_target(row: &LogRow) -> String {
    if row.target.is_empty() {
        row.operation.clone()
    } else {
        format!("{} ({})", row.operation, row.target)
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render the internal log, one line per row, operation coloured.
    pub fn render(rows: &[LogRow]) -> AppResult<Vec<String>> {
        let re = Regex::new(r"\x1B\[[0-9;]*[mK]")
            .map_err(|e| AppError::Other(format!("ANSI pattern: {e}")))?;

        let op_w = rows
            .iter()
            .map(|r| op_target(r).len())
            .max()
            .unwrap_or(10)
            .min(MAX_OP_WIDTH);
        let id_w = rows.iter().map(|r| r.id.to_string().len()).max().unwrap_or(1);

        let mut lines = Vec::with_capacity(rows.len());

        for row in rows {
            let date = chrono::DateTime::parse_from_rfc3339(&row.date)
                .map(|dt| dt.format("%FT%T%:z").to_string())
                .unwrap_or_else(|_| row.date.clone());

            let color = color_for_operation(&row.operation);

            let mut visible = op_target(row);
            if visible.chars().count() > MAX_OP_WIDTH {
                visible = visible.chars().take(MAX_OP_WIDTH - 3).collect::<String>() + "...";
            }

            // only the operation word is coloured
            let colored = match visible.split_once(' ') {
                Some((op, rest)) => format!("{} {}", color.paint(op), rest),
                None => color.paint(visible.as_str()).to_string(),
            };

            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&re, &colored).chars().count()));

            lines.push(format!(
                "{:>id_w$}: {} | {}{} => {}",
                row.id,
                date,
                colored,
                padding,
                row.message,
                id_w = id_w
            ));
        }

        Ok(lines)
    }

    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let rows = load_log(conn)?;

        println!("📜 Internal log:\n");
        for line in Self::render(&rows)? {
            println!("{line}");
        }

        Ok(())
    }
}
