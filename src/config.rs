use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::core::Field;

pub const CONFIG_FILE_NAME: &str = ".swiftlocrc.json";

/// A target locale: written to `<root>/<name>.lproj/<resourceFileName>`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LocaleTarget {
    pub name: String,
    pub field: Field,
}

impl LocaleTarget {
    pub fn new(name: impl Into<String>, field: Field) -> Self {
        Self {
            name: name.into(),
            field,
        }
    }

    pub fn resource_path(&self, root: &Path, file_name: &str) -> PathBuf {
        root.join(format!("{}.lproj", self.name)).join(file_name)
    }
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_extensions")]
    pub source_extensions: Vec<String>,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default = "default_resource_file_name")]
    pub resource_file_name: String,
    #[serde(default = "default_locales")]
    pub locales: Vec<LocaleTarget>,
}

fn default_source_extensions() -> Vec<String> {
    vec!["swift".to_string()]
}

fn default_resource_file_name() -> String {
    "Localizable.strings".to_string()
}

fn default_locales() -> Vec<LocaleTarget> {
    vec![
        LocaleTarget::new("Base", Field::Base),
        LocaleTarget::new("ja", Field::Translation),
    ]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_extensions: default_source_extensions(),
            ignores: Vec::new(),
            resource_file_name: default_resource_file_name(),
            locales: default_locales(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob pattern in `ignores` is invalid or the
    /// source extension list is empty.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        if self.source_extensions.is_empty() {
            anyhow::bail!("'sourceExtensions' must not be empty");
        }

        if self.resource_file_name.trim().is_empty() {
            anyhow::bail!("'resourceFileName' must not be empty");
        }

        Ok(())
    }

    pub fn resource_paths(&self, root: &Path) -> Vec<(PathBuf, Field)> {
        self.locales
            .iter()
            .map(|locale| {
                (
                    locale.resource_path(root, &self.resource_file_name),
                    locale.field,
                )
            })
            .collect()
    }
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config was read from, `None` when using defaults.
    pub source: Option<PathBuf>,
}

pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => Ok(ConfigLoadResult {
            config: load_config_file(&path)?,
            source: Some(path),
        }),
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            source: None,
        }),
    }
}
