//! # Picker Config Store
//!
//! File-based storage for [`PickerConfig`] using a single YAML file in the
//! platform config directory.
//!
//! ## YAML Format
//!
//! ```yaml
//! narrow_breakpoint: 730.0
//! narrow_popover_width: 300.0
//! wide_popover_width: 500.0
//! wide_preset_pane_width: 140.0
//! ```
//!
//! Missing keys fall back to their defaults.

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use log::{debug, info};
use shared::PickerConfig;
use std::fs;
use std::path::PathBuf;

/// Name of the config file inside the config directory
pub const CONFIG_FILE_NAME: &str = "picker_config.yaml";

/// Loads and saves the picker configuration
#[derive(Debug, Clone)]
pub struct ConfigStore {
    base_directory: PathBuf,
}

impl ConfigStore {
    /// Create a store rooted at an explicit directory
    pub fn new(base_directory: impl Into<PathBuf>) -> Self {
        Self {
            base_directory: base_directory.into(),
        }
    }

    /// Create a store in the platform's config directory for this app
    pub fn from_project_dirs() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "month-range-picker")
            .ok_or_else(|| anyhow!("Could not determine a config directory for this platform"))?;
        Ok(Self::new(dirs.config_dir()))
    }

    /// Full path of the config file
    pub fn config_path(&self) -> PathBuf {
        self.base_directory.join(CONFIG_FILE_NAME)
    }

    /// Load the config, writing the defaults first if no file exists yet
    pub fn load_or_create(&self) -> Result<PickerConfig> {
        let config_path = self.config_path();

        if config_path.exists() {
            let yaml_content = fs::read_to_string(&config_path)
                .with_context(|| format!("Failed to read {:?}", config_path))?;
            let config: PickerConfig = serde_yaml::from_str(&yaml_content)
                .with_context(|| format!("Failed to parse {:?}", config_path))?;
            config.validate()?;
            debug!("Loaded picker config from {:?}", config_path);
            Ok(config)
        } else {
            let config = PickerConfig::default();
            self.save(&config)?;
            info!("Created default picker config at {:?}", config_path);
            Ok(config)
        }
    }

    /// Save the config, replacing any existing file
    pub fn save(&self, config: &PickerConfig) -> Result<()> {
        config.validate()?;

        if !self.base_directory.exists() {
            fs::create_dir_all(&self.base_directory)?;
            info!("Created config directory: {:?}", self.base_directory);
        }

        let config_path = self.config_path();
        let yaml_content = serde_yaml::to_string(config)?;

        // Write to a temp file, then rename over the real one
        let temp_path = config_path.with_extension("tmp");
        fs::write(&temp_path, yaml_content)?;
        fs::rename(&temp_path, &config_path)?;

        debug!("Saved picker config to {:?}", config_path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_creates_default_config_when_missing() {
        let temp_dir = TempDir::new().unwrap();
        let store = ConfigStore::new(temp_dir.path().join("nested"));

        let config = store.load_or_create().unwrap();

        assert_eq!(config, PickerConfig::default());
        assert!(store.config_path().exists());
        assert!(!store.config_path().with_extension("tmp").exists());
    }

    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = ConfigStore::new(temp_dir.path());
        let config = PickerConfig {
            narrow_breakpoint: 640.0,
            wide_popover_width: 560.0,
            ..PickerConfig::default()
        };

        store.save(&config).unwrap();

        assert_eq!(store.load_or_create().unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let store = ConfigStore::new(temp_dir.path());
        fs::write(store.config_path(), "narrow_breakpoint: 500.0\n").unwrap();

        let config = store.load_or_create().unwrap();

        assert_eq!(config.narrow_breakpoint, 500.0);
        assert_eq!(config.narrow_popover_width, 300.0);
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let store = ConfigStore::new(temp_dir.path());
        fs::write(store.config_path(), "narrow_breakpoint: [not, a, number]\n").unwrap();

        assert!(store.load_or_create().is_err());
    }

    #[test]
    fn test_invalid_dimensions_are_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let store = ConfigStore::new(temp_dir.path());
        fs::write(store.config_path(), "wide_popover_width: -10.0\n").unwrap();

        let err = store.load_or_create().unwrap_err();
        assert!(err.to_string().contains("wide_popover_width"));

        let invalid = PickerConfig {
            narrow_popover_width: 0.0,
            ..PickerConfig::default()
        };
        assert!(store.save(&invalid).is_err());
    }
}
