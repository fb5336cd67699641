use crate::error::{FitError, Result};
use crate::types::config::FitConfig;
use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;
use tracing::debug;

pub const DEFAULT_CONFIG_FILE: &str = "founderfit.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".founderfit/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/founderfit/config.toml";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigLayer {
    Global,
    Project,
    Local,
}

impl fmt::Display for ConfigLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Global => "global",
            Self::Project => "project",
            Self::Local => "local",
        })
    }
}

/// Dotted leaf key to the layer and file that last set it.
type Provenance = BTreeMap<String, (ConfigLayer, PathBuf)>;

pub fn load_config(root: &Path) -> Result<Option<FitConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<FitConfig>> {
    let project_path = root.join(DEFAULT_CONFIG_FILE);
    if !project_path.exists() {
        return Ok(None);
    }

    let layers = [
        (ConfigLayer::Global, global_path.map(Path::to_path_buf)),
        (ConfigLayer::Project, Some(project_path)),
        (ConfigLayer::Local, Some(root.join(DEFAULT_LOCAL_FILE))),
    ];

    let mut merged = Value::Table(Map::new());
    let mut provenance = Provenance::new();
    for (layer, path) in layers {
        let Some(path) = path.filter(|path| path.exists()) else {
            continue;
        };
        let overlay = read_toml_value(&path)?;
        debug!(%layer, path = %path.display(), "merging config layer");
        let mut origin = |key: &str| {
            provenance.insert(key.to_string(), (layer, path.clone()));
        };
        merge_toml(&mut merged, overlay, "", &mut origin);
    }

    let cfg: FitConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| FitError::ConfigParse(e.to_string()))?;
    cfg.check().map_err(|violation| match provenance.get(&violation.key) {
        Some((layer, path)) => FitError::ConfigParse(format!(
            "{violation} (set by {layer} config {})",
            path.display()
        )),
        None => FitError::ConfigParse(violation.to_string()),
    })?;
    Ok(Some(cfg))
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| FitError::ConfigParse(format!("{}: {}", path.display(), e)))
}

/// Overlays `overlay` onto `base`. Tables merge key by key; arrays and scalars are replaced.
/// `origin` sees the dotted path of every leaf the overlay writes.
fn merge_toml(base: &mut Value, overlay: Value, prefix: &str, origin: &mut dyn FnMut(&str)) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                let path = dotted(prefix, &key);
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value, &path, origin),
                    None => {
                        record_leaves(&value, &path, origin);
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            record_leaves(&value, prefix, origin);
            *slot = value;
        }
    }
}

fn record_leaves(value: &Value, path: &str, origin: &mut dyn FnMut(&str)) {
    match value {
        Value::Table(table) => {
            for (key, nested) in table {
                record_leaves(nested, &dotted(path, key), origin);
            }
        }
        _ => origin(path),
    }
}

fn dotted(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}
