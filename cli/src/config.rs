//! Configuration management for CLI tools.
//!
//! Configuration is stored in ~/.kata/{app_name}/config.yaml

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;

/// Default base configuration directory name.
pub const DEFAULT_BASE_DIR: &str = ".kata";
/// Default configuration filename.
pub const DEFAULT_CONFIG_FILE: &str = "config.yaml";

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Application name (not serialized).
    #[serde(skip)]
    pub app_name: String,

    /// Buffer capacity used when neither the command line nor the script
    /// sets one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_capacity: Option<usize>,

    /// Preferred output format.
    #[serde(default)]
    pub output: OutputFormat,

    /// Path to the config file (not serialized).
    #[serde(skip)]
    config_path: PathBuf,
}

impl Config {
    /// Gets the default config directory.
    pub fn default_config_dir(app_name: &str) -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(DEFAULT_BASE_DIR).join(app_name))
    }

    /// Gets the default config file path.
    pub fn default_config_path(app_name: &str) -> Option<PathBuf> {
        Self::default_config_dir(app_name).map(|dir| dir.join(DEFAULT_CONFIG_FILE))
    }

    /// Returns the config file path.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Saves the configuration to disk.
    pub fn save(&self) -> anyhow::Result<()> {
        let content = serde_yaml::to_string(self)?;
        std::fs::write(&self.config_path, content)?;
        Ok(())
    }

    /// Sets and saves the default buffer capacity.
    pub fn set_default_capacity(&mut self, capacity: usize) -> anyhow::Result<()> {
        if capacity == 0 {
            anyhow::bail!("default capacity must be greater than 0");
        }
        self.default_capacity = Some(capacity);
        self.save()
    }

    /// Sets and saves the preferred output format.
    pub fn set_output(&mut self, format: OutputFormat) -> anyhow::Result<()> {
        self.output = format;
        self.save()
    }

    /// Picks the first capacity that is set: explicit flag, script, then config.
    pub fn resolve_capacity(&self, flag: Option<usize>, script: Option<usize>) -> Option<usize> {
        flag.or(script).or(self.default_capacity)
    }
}

/// Loads configuration for the specified app, creating an empty file if
/// none exists yet.
pub fn load_config(app_name: &str, custom_path: Option<&str>) -> anyhow::Result<Config> {
    let config_path = match custom_path {
        Some(p) => PathBuf::from(p),
        None => Config::default_config_path(app_name)
            .ok_or_else(|| anyhow::anyhow!("cannot determine config path"))?,
    };

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let mut cfg: Config = if config_path.exists() {
        let content = std::fs::read_to_string(&config_path)?;
        serde_yaml::from_str(&content)?
    } else {
        let cfg = Config::default();
        let content = serde_yaml::to_string(&cfg)?;
        std::fs::write(&config_path, content)?;
        tracing::info!(path = %config_path.display(), "created config file");
        cfg
    };

    cfg.app_name = app_name.to_string();
    cfg.config_path = config_path;

    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let path_str = path.to_string_lossy().into_owned();

        let cfg = load_config("kata", Some(path_str.as_str())).unwrap();
        assert!(path.exists());
        assert_eq!(cfg.app_name, "kata");
        assert_eq!(cfg.default_capacity, None);
        assert_eq!(cfg.output, OutputFormat::Yaml);
        assert_eq!(cfg.path(), path.as_path());
    }

    #[test]
    fn test_settings_persist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        let path_str = path.to_string_lossy().into_owned();

        let mut cfg = load_config("kata", Some(path_str.as_str())).unwrap();
        cfg.set_default_capacity(8).unwrap();
        cfg.set_output(OutputFormat::Json).unwrap();

        let reloaded = load_config("kata", Some(path_str.as_str())).unwrap();
        assert_eq!(reloaded.default_capacity, Some(8));
        assert_eq!(reloaded.output, OutputFormat::Json);
    }

    #[test]
    fn test_zero_default_capacity_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path_str = dir.path().join("config.yaml").to_string_lossy().into_owned();
        let mut cfg = load_config("kata", Some(path_str.as_str())).unwrap();

        assert!(cfg.set_default_capacity(0).is_err());
        assert_eq!(cfg.default_capacity, None);
    }

    #[test]
    fn test_load_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        std::fs::write(&path, "default_capacity: 4\noutput: json\n").unwrap();

        let path_str = path.to_string_lossy().into_owned();

        let cfg = load_config("kata", Some(path_str.as_str())).unwrap();
        assert_eq!(cfg.default_capacity, Some(4));
        assert_eq!(cfg.output, OutputFormat::Json);
    }

    #[test]
    fn test_resolve_capacity_precedence() {
        let cfg = Config {
            default_capacity: Some(16),
            ..Default::default()
        };
        assert_eq!(cfg.resolve_capacity(Some(2), Some(4)), Some(2));
        assert_eq!(cfg.resolve_capacity(None, Some(4)), Some(4));
        assert_eq!(cfg.resolve_capacity(None, None), Some(16));
        assert_eq!(Config::default().resolve_capacity(None, None), None);
    }
}
