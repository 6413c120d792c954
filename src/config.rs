//! Configuration file support for pkgdash.
//!
//! Provides YAML-based configuration through `pkgdash.config.yml` files,
//! including data structures, file loading, and validation. The config
//! supplies defaults for the dataset location, schema path, page size, and
//! refresh interval; command-line flags always win.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

use crate::shared::Result;

const CONFIG_FILENAME: &str = "pkgdash.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    /// Dataset location: a file path or an http(s) URL
    pub data: Option<String>,
    /// JSON Schema file for `pkgdash validate`
    pub schema: Option<String>,
    pub page_size: Option<usize>,
    pub refresh_seconds: Option<u64>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(page_size) = config.page_size {
        if page_size == 0 {
            bail!(
                "Invalid config: page_size must be at least 1.\n\n\
                 💡 Hint: Omit page_size to use the default of 100 records per page."
            );
        }
    }

    if let Some(refresh_seconds) = config.refresh_seconds {
        if refresh_seconds == 0 {
            bail!(
                "Invalid config: refresh_seconds must be at least 1.\n\n\
                 💡 Hint: Omit refresh_seconds to use the default of 300 seconds."
            );
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}
