//! Workspace configuration for splay-lsp.
//!
//! Settings come from `splay.toml` (or `.splay.toml`) in the workspace root
//! and from `workspace/didChangeConfiguration` under the `splay` key. Both
//! use the same `[layout]` section shape.

use serde::Deserialize;
use serde_json::Value;
use splay_ide::LayoutConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

pub(crate) const CONFIG_FILES: &[&str] = &["splay.toml", ".splay.toml"];

/// Errors reading a config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file exists but could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The file is not valid TOML or has unknown values.
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    layout: LayoutConfig,
}

/// Returns the first config file present in `root`.
pub fn find_config_file(root: &Path) -> Option<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| root.join(name))
        .find(|path| path.is_file())
}

/// Reads the `[layout]` section of the config file at `path`.
pub fn read_config(path: &Path) -> Result<LayoutConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: ConfigFile = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(file.layout)
}

/// Loads the layout configuration for a workspace root.
///
/// A missing file means defaults; an unreadable or invalid one is logged and
/// also means defaults.
pub fn load(root: &Path) -> LayoutConfig {
    let Some(path) = find_config_file(root) else {
        return LayoutConfig::default();
    };
    match read_config(&path) {
        Ok(config) => config,
        Err(err) => {
            warn!("{err}; using default layout settings");
            LayoutConfig::default()
        }
    }
}

/// Extracts layout settings from a `didChangeConfiguration` payload.
///
/// Accepts `{"splay": {"layout": {...}}}` as well as a payload already
/// scoped to the `splay` section. Returns `None` if neither is present.
pub fn from_settings(settings: &Value) -> Option<LayoutConfig> {
    let section = settings.get("splay").unwrap_or(settings);
    let layout = section.get("layout")?;
    match serde_json::from_value(layout.clone()) {
        Ok(config) => Some(config),
        Err(err) => {
            warn!("Ignoring invalid splay.layout settings: {err}");
            None
        }
    }
}
