use crate::cli::commands::{audit, material_id_or_default, open_port};
use crate::cli::parser::{Commands, ShiftAction};
use crate::cli::validate::{non_negative, positive};
use crate::config::Config;
use crate::core::shifts::{ShiftBuckets, average_efficiency, classify, material_breakdown};
use crate::errors::{AppError, AppResult};
use crate::models::material::{MaterialSetting, describe_material};
use crate::models::now_millis;
use crate::models::shift::{NewShift, NewShiftEntry, ShiftPatch, ShiftWithProgress};
use crate::store::{MaterialRegistry, ShiftStore};
use crate::ui::messages::{header, info, success};
use crate::utils::colors::{GREEN, color_for_efficiency, paint};
use crate::utils::date::{self, format_timestamp};
use crate::utils::formatting::{fmt_num, fmt_percent, wrap_text};
use crate::utils::table::{Column, Table};

fn print_section(
    title: &str,
    shifts: &[ShiftWithProgress],
    materials: &[MaterialSetting],
    details: bool,
    cfg: &Config,
) {
    header(format!("{} ({})", title, shifts.len()));

    if shifts.is_empty() {
        info("None.");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("ID", 38),
        Column::new("WHEN", 48),
        Column::new("MATERIAL", 9),
        Column::new("TARGET", 8),
        Column::new("ACTUAL", 8),
        Column::new("EFF.", 8),
    ]);

    for s in shifts {
        let name = if s.is_active {
            paint(&format!("{} (active)", s.friendly_name), GREEN)
        } else {
            s.friendly_name.clone()
        };
        table.add_row(vec![
            s.shift.id.clone(),
            name,
            describe_material(materials.iter().find(|m| m.id == s.shift.material_id)),
            fmt_num(s.shift.target_output),
            fmt_num(s.actual_output),
            paint(&fmt_percent(s.efficiency), color_for_efficiency(s.efficiency)),
        ]);
    }
    print!("{}", table.render(&cfg.separator_char));

    if !details {
        return;
    }

    for s in shifts {
        println!("\n{}", s.friendly_name);
        if let Some(notes) = &s.shift.notes {
            println!("{}", wrap_text(notes, 72, "  "));
        }
        if s.shift.entries.is_empty() {
            println!("  no production recorded");
            continue;
        }
        for group in material_breakdown(&s.shift, materials) {
            println!(
                "  {}: {} logs in {} min",
                group.label,
                fmt_num(group.total_output),
                group.total_minutes
            );
            for e in &group.entries {
                println!(
                    "    {}  {} RPM  {} min  {} logs{}",
                    format_timestamp(e.timestamp),
                    fmt_num(e.speed),
                    e.duration_minutes,
                    fmt_num(e.actual_output),
                    e.notes.as_deref().map(|n| format!("  {n}")).unwrap_or_default()
                );
            }
        }
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Shift { action } = cmd else {
        return Ok(());
    };

    let port = open_port(cfg)?;
    let registry = MaterialRegistry::open(&port)?;
    let mut store = ShiftStore::open(&port)?;

    match action {
        ShiftAction::List {
            current,
            upcoming,
            history,
            details,
        } => {
            let ShiftBuckets {
                current: cur,
                upcoming: up,
                historical,
            } = classify(store.shifts(), date::now());
            let all = !(*current || *upcoming || *history);
            let materials = registry.list();

            if all || *current {
                print_section("Current shifts", &cur, materials, *details, cfg);
            }
            if all || *upcoming {
                print_section("Upcoming shifts", &up, materials, *details, cfg);
            }
            if all || *history {
                print_section("Shift history", &historical, materials, *details, cfg);
                if !historical.is_empty() {
                    println!(
                        "\nAverage efficiency: {}",
                        fmt_percent(average_efficiency(&historical))
                    );
                }
            }
        }

        ShiftAction::Add {
            start,
            end,
            target,
            material,
            notes,
        } => {
            let material_id = material_id_or_default(&registry, material, cfg)
                .ok_or_else(|| AppError::InvalidMaterial("no materials configured".to_string()))?;

            let shift = store.add_shift(NewShift {
                start_time: start.clone(),
                end_time: end.clone(),
                target_output: positive("target", *target)?,
                material_id,
                notes: notes.clone(),
            })?;

            success(format!("Shift added (id {}).", shift.id));
            audit(&port, "add", "shift", &format!("{} → {}", shift.start_time, shift.end_time));
        }

        ShiftAction::Update {
            id,
            start,
            end,
            target,
            material,
            notes,
        } => {
            let patch = ShiftPatch {
                start_time: start.clone(),
                end_time: end.clone(),
                target_output: target.map(|t| positive("target", t)).transpose()?,
                material_id: material.clone(),
                notes: notes.clone().map(|n| Some(n).filter(|s| !s.is_empty())),
            };

            if !store.update_shift(id, patch)? {
                return Err(AppError::NotFound("Shift", id.clone()));
            }
            success(format!("Shift {} updated.", id));
            audit(&port, "edit", "shift", id);
        }

        ShiftAction::Del { id } => {
            if !store.delete_shift(id)? {
                return Err(AppError::NotFound("Shift", id.clone()));
            }
            success(format!("Shift {} deleted.", id));
            audit(&port, "del", "shift", id);
        }

        ShiftAction::Entry {
            shift_id,
            material,
            speed,
            duration,
            actual,
            notes,
        } => {
            let shift_material = store.get(shift_id).map(|s| s.material_id.clone());
            let material_id = material
                .clone()
                .or(shift_material)
                .ok_or_else(|| AppError::NotFound("Shift", shift_id.clone()))?;

            let entry = store
                .add_entry(
                    shift_id,
                    NewShiftEntry {
                        timestamp: now_millis(),
                        material_id,
                        speed: non_negative("speed", *speed)?,
                        duration_minutes: *duration,
                        actual_output: non_negative("actual", *actual)?,
                        notes: notes.clone(),
                    },
                )?
                .ok_or_else(|| AppError::NotFound("Shift", shift_id.clone()))?;

            success(format!(
                "Recorded {} logs on {} (entry {}).",
                fmt_num(entry.actual_output),
                describe_material(registry.get(&entry.material_id)),
                entry.id
            ));
            audit(&port, "add", "shift-entry", shift_id);
        }
    }

    Ok(())
}
