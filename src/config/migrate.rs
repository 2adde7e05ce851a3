//! Keeps an existing config file in step with new releases: keys added
//! after the file was written are reported by `--check` and filled in with
//! their defaults by `--migrate`.

use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("cannot parse {}: {e}", path.display())))?;

    match yaml {
        Value::Mapping(map) => Ok(map),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{} is not a YAML mapping",
            path.display()
        ))),
    }
}

fn default_mapping() -> AppResult<Mapping> {
    match serde_yaml::to_value(Config::default())
        .map_err(|e| AppError::Config(e.to_string()))?
    {
        Value::Mapping(map) => Ok(map),
        _ => Err(AppError::Other("default config is not a mapping".into())),
    }
}

/// Keys known to this version but absent from the file.
pub fn missing_keys(path: &Path) -> AppResult<Vec<String>> {
    let current = read_mapping(path)?;
    let defaults = default_mapping()?;

    Ok(defaults
        .keys()
        .filter(|k| !current.contains_key(*k))
        .filter_map(|k| k.as_str().map(str::to_string))
        .collect())
}

/// Add the missing keys with their default values.
/// Existing values are never overwritten. Returns the keys added.
pub fn fill_missing(path: &Path) -> AppResult<Vec<String>> {
    let mut current = read_mapping(path)?;
    let defaults = default_mapping()?;
    let mut added = Vec::new();

    for (key, value) in defaults {
        if !current.contains_key(&key) {
            if let Some(k) = key.as_str() {
                added.push(k.to_string());
            }
            current.insert(key, value);
        }
    }

    if !added.is_empty() {
        let serialized = serde_yaml::to_string(&Value::Mapping(current))
            .map_err(|e| AppError::Config(e.to_string()))?;
        fs::write(path, serialized)?;
    }

    Ok(added)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_missing_keeps_existing_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("obras.conf");
        fs::write(&path, "api_url: http://10.0.0.9:5000\n").unwrap();

        let missing = missing_keys(&path).unwrap();
        assert!(missing.contains(&"camera_enabled".to_string()));
        assert!(!missing.contains(&"api_url".to_string()));

        let added = fill_missing(&path).unwrap();
        assert_eq!(added.len(), 3);
        assert!(missing_keys(&path).unwrap().is_empty());

        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.api_url, "http://10.0.0.9:5000");
        assert!(fill_missing(&path).unwrap().is_empty());
    }
}
