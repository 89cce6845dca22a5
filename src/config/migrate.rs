//! Bring an existing YAML config file up to date with the current set of keys.

use crate::config::Config;
use crate::errors::AppResult;
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Keys a current config file carries, with the value written when missing.
fn expected_keys() -> AppResult<Mapping> {
    let defaults = serde_yaml::to_value(Config::default())?;
    Ok(match defaults {
        Value::Mapping(map) => map,
        _ => Mapping::new(),
    })
}

/// Names of the keys absent from the YAML `content`.
pub fn missing_keys(content: &str) -> AppResult<Vec<String>> {
    let yaml: Value = serde_yaml::from_str(content)?;
    let present = yaml.as_mapping().cloned().unwrap_or_default();

    Ok(expected_keys()?
        .keys()
        .filter(|k| !present.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add every missing key with its default value. The `database` key is never
/// overwritten. Returns the keys that were added.
pub fn migrate_config_file(path: &Path) -> AppResult<Vec<String>> {
    let content = fs::read_to_string(path)?;
    let mut yaml: Value = serde_yaml::from_str(&content)?;

    let Some(map) = yaml.as_mapping_mut() else {
        return Ok(Vec::new());
    };

    let mut added = Vec::new();
    for (key, value) in expected_keys()? {
        if !map.contains_key(&key) {
            if let Some(name) = key.as_str() {
                added.push(name.to_string());
            }
            map.insert(key, value);
        }
    }

    if !added.is_empty() {
        fs::write(path, serde_yaml::to_string(&yaml)?)?;
    }

    Ok(added)
}
