use crate::error::{PortfolioError, Result};
use crate::types::config::PortfolioConfig;
use std::path::{Path, PathBuf};
use toml::map::Map;
use toml::Value;

pub const DEFAULT_CONFIG_FILE: &str = "portfolio.toml";
pub const DEFAULT_LOCAL_FILE: &str = ".portfolio/local.toml";
pub const DEFAULT_GLOBAL_CONFIG_FILE: &str = ".config/portfolio-score/config.toml";

/// Loads `portfolio.toml` from `root`, layered over the global config and
/// under the local override. Returns `None` when the project file is absent.
pub fn load_config(root: &Path) -> Result<Option<PortfolioConfig>> {
    let global = std::env::var_os("HOME")
        .map(PathBuf::from)
        .map(|home| home.join(DEFAULT_GLOBAL_CONFIG_FILE));
    load_config_with_global(root, global.as_deref())
}

pub(crate) fn load_config_with_global(
    root: &Path,
    global_path: Option<&Path>,
) -> Result<Option<PortfolioConfig>> {
    let project_path = root.join(DEFAULT_CONFIG_FILE);
    if !project_path.exists() {
        return Ok(None);
    }

    let mut merged = Value::Table(Map::new());
    if let Some(path) = global_path {
        merge_file_if_exists(&mut merged, path)?;
    }
    merge_file_if_exists(&mut merged, &project_path)?;
    merge_file_if_exists(&mut merged, &root.join(DEFAULT_LOCAL_FILE))?;

    let cfg: PortfolioConfig = merged
        .try_into()
        .map_err(|e: toml::de::Error| PortfolioError::ConfigParse(e.to_string()))?;
    cfg.validate()?;
    Ok(Some(cfg))
}

fn merge_file_if_exists(merged: &mut Value, path: &Path) -> Result<()> {
    if !path.exists() {
        return Ok(());
    }
    let value = read_toml_value(path)?;
    merge_toml(merged, value);
    Ok(())
}

fn read_toml_value(path: &Path) -> Result<Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content)
        .map_err(|e| PortfolioError::ConfigParse(format!("{}: {}", path.display(), e)))
}

fn merge_toml(base: &mut Value, overlay: Value) {
    match (base, overlay) {
        (Value::Table(base_table), Value::Table(overlay_table)) => {
            for (key, value) in overlay_table {
                match base_table.get_mut(&key) {
                    Some(existing) => merge_toml(existing, value),
                    None => {
                        base_table.insert(key, value);
                    }
                }
            }
        }
        (slot, value) => {
            *slot = value;
        }
    }
}
