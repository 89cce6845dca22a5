use crate::cli::commands::{audit, open_port};
use crate::cli::parser::{Commands, LogbookAction};
use crate::cli::validate::non_negative;
use crate::config::Config;
use crate::core::logbook::{LogbookFilter, all_tags, filter_entries};
use crate::errors::{AppError, AppResult};
use crate::models::logbook::{ImageKind, LogbookCategory, LogbookPatch, NewLogbookEntry};
use crate::models::material::describe_material;
use crate::store::{LogbookStore, MaterialRegistry};
use crate::ui::messages::{info, success};
use crate::utils::colors::{GREY, paint};
use crate::utils::date::format_timestamp;
use crate::utils::formatting::{bold, fmt_num, wrap_text};
use std::collections::BTreeSet;

fn parse_category(code: &str) -> AppResult<LogbookCategory> {
    LogbookCategory::from_code(code).ok_or_else(|| {
        let valid: Vec<&str> = LogbookCategory::ALL.iter().map(|c| c.as_str()).collect();
        AppError::InvalidCategory(format!("'{}' (expected one of: {})", code, valid.join(", ")))
    })
}

fn tag_set(tags: &[String]) -> BTreeSet<String> {
    tags.iter()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
        .collect()
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Logbook { action } = cmd else {
        return Ok(());
    };

    let port = open_port(cfg)?;
    let mut logbook = LogbookStore::open(&port)?;

    match action {
        LogbookAction::List {
            search,
            category,
            tags,
        } => {
            let filter = LogbookFilter {
                search: search.clone(),
                category: category.as_deref().map(parse_category).transpose()?,
                tags: tags.clone(),
            };

            let entries = filter_entries(logbook.entries(), &filter);
            if entries.is_empty() {
                info("No logbook entries found.");
                return Ok(());
            }

            let registry = MaterialRegistry::open(&port)?;

            for e in entries {
                println!(
                    "{}  {}  [{}]",
                    bold(&e.title),
                    paint(&format_timestamp(e.timestamp), GREY),
                    e.category.as_str()
                );
                println!("{}", wrap_text(&e.content, 72, "  "));

                let mut meta = Vec::new();
                if !e.tags.is_empty() {
                    meta.push(format!(
                        "tags: {}",
                        e.tags.iter().cloned().collect::<Vec<_>>().join(", ")
                    ));
                }
                if let Some(id) = &e.material_id {
                    meta.push(format!("material: {}", describe_material(registry.get(id))));
                }
                if let Some(speed) = e.speed {
                    meta.push(format!("speed: {} RPM", fmt_num(speed)));
                }
                if !e.images.is_empty() {
                    meta.push(format!("images: {}", e.images.len()));
                }
                meta.push(format!("id: {}", e.id));
                println!("  {}\n", paint(&meta.join(" | "), GREY));
            }
        }

        LogbookAction::Add {
            title,
            content,
            category,
            tags,
            material,
            speed,
        } => {
            let entry = logbook.add_entry(NewLogbookEntry {
                title: title.clone(),
                content: content.clone(),
                category: parse_category(category)?,
                tags: tag_set(tags),
                material_id: material.clone(),
                speed: speed.map(|s| non_negative("speed", s)).transpose()?,
            })?;

            success(format!("Logbook entry added (id {}).", entry.id));
            audit(&port, "add", "logbook", &entry.title);
        }

        LogbookAction::Update {
            id,
            title,
            content,
            category,
            tags,
        } => {
            let patch = LogbookPatch {
                title: title.clone(),
                content: content.clone(),
                category: category.as_deref().map(parse_category).transpose()?,
                tags: (!tags.is_empty()).then(|| tag_set(tags)),
                ..Default::default()
            };

            if !logbook.update_entry(id, patch)? {
                return Err(AppError::NotFound("Logbook entry", id.clone()));
            }
            success(format!("Logbook entry {} updated.", id));
            audit(&port, "edit", "logbook", id);
        }

        LogbookAction::Del { id } => {
            if !logbook.delete_entry(id)? {
                return Err(AppError::NotFound("Logbook entry", id.clone()));
            }
            success(format!("Logbook entry {} deleted.", id));
            audit(&port, "del", "logbook", id);
        }

        LogbookAction::ImageAdd {
            entry_id,
            url,
            kind,
        } => {
            let kind = ImageKind::from_code(kind)
                .ok_or_else(|| AppError::Other(format!("unknown image type '{kind}' (upload, camera)")))?;

            let image = logbook
                .add_image(entry_id, url.clone(), kind)?
                .ok_or_else(|| AppError::NotFound("Logbook entry", entry_id.clone()))?;

            success(format!("Image attached (id {}).", image.id));
            audit(&port, "add", "logbook-image", entry_id);
        }

        LogbookAction::ImageDel { entry_id, image_id } => {
            if !logbook.delete_image(entry_id, image_id)? {
                return Err(AppError::NotFound("Image", image_id.clone()));
            }
            success(format!("Image {} removed.", image_id));
            audit(&port, "del", "logbook-image", image_id);
        }

        LogbookAction::Tags => {
            let tags = all_tags(logbook.entries());
            if tags.is_empty() {
                info("No tags in use.");
            } else {
                for t in tags {
                    println!("{t}");
                }
            }
        }
    }

    Ok(())
}
