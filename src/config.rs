//! Configuration file support for image-sbom.
//!
//! Provides YAML-based configuration through `image-sbom.config.yml` files,
//! including data structures, file loading, and validation.

use anyhow::{bail, Context};
use image_sbom::application::dto::GenerationMode;
use image_sbom::shared::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "image-sbom.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub output_dir: Option<PathBuf>,
    pub mode: Option<String>,
    pub generators: Option<Vec<String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

impl ConfigFile {
    /// Parsed generation mode; validated on load
    pub fn generation_mode(&self) -> Option<GenerationMode> {
        self.mode.as_deref().and_then(|m| m.parse().ok())
    }
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

fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref mode) = config.mode {
        if let Err(e) = mode.parse::<GenerationMode>() {
            bail!("Invalid config: {}", e);
        }
    }

    if let Some(ref generators) = config.generators {
        for (i, key) in generators.iter().enumerate() {
            if key.trim().is_empty() {
                bail!(
                    "Invalid config: generators[{}] must not be empty.\n\n\
                     💡 Hint: Use a generator key such as \"cyclonedx\".",
                    i
                );
            }
        }
    }
    Ok(())
}

fn warn_unknown_fields(config: &ConfigFile) {
    let mut keys: Vec<&String> = config.unknown_fields.keys().collect();
    keys.sort();
    for key in keys {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
