//! `palette.toml` engine configuration.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use palette_assembly::{AssemblyOptions, SectionOrder};
use palette_model::{CategoryTable, DeviceDescriptor, Messages, SectionId};
use palette_prefs::PreferenceConfig;
use palette_sections::SectionLibrary;

/// Configuration file read when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "palette.toml";

/// Preference file used when `storage_path` is not configured.
pub const DEFAULT_STORAGE_FILE: &str = "palette-prefs.toml";

/// Engine configuration. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Key the experience tier is stored under.
    pub storage_key: Option<String>,
    pub storage_path: Option<PathBuf>,
    pub separator_gap: Option<u32>,
    pub messages: Messages,
    /// Extra categories, also used for the compact palette.
    pub categories: CategoryTable,
    /// Event block types offered per device type in upload mode.
    pub device_events: BTreeMap<String, Vec<String>>,
}

impl EngineConfig {
    /// Load `path`, or `palette.toml` when `path` is `None`.
    ///
    /// A missing default file yields the defaults; a missing explicit file is
    /// an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.exists() {
                    Self::load_from(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config = Self::parse(&content).with_context(|| format!("load config {}", path.display()))?;
        Ok(config)
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).context("parse config")?;
        config.categories.validate().context("validate categories")?;
        Ok(config)
    }

    pub fn storage_path(&self) -> PathBuf {
        self.storage_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STORAGE_FILE))
    }

    pub fn preference_config(&self) -> PreferenceConfig {
        match &self.storage_key {
            Some(key) => PreferenceConfig::with_storage_key(key.as_str()),
            None => PreferenceConfig::default(),
        }
    }

    pub fn assembly_options(&self) -> AssemblyOptions {
        let mut options = AssemblyOptions::default();
        if let Some(gap) = self.separator_gap {
            options.separator_gap = gap;
        }
        options
    }

    /// Built-in sections plus one section per configured category.
    pub fn library(&self) -> SectionLibrary {
        SectionLibrary::builtin().with_catalog(&self.categories)
    }

    /// Default orderings with configured categories appended to the
    /// non-device ordering.
    pub fn order(&self) -> SectionOrder {
        let mut order = SectionOrder::default();
        for category in &self.categories {
            let id = SectionId::from(category.id.as_str());
            if !order.default.contains(&id) {
                order.default.push(id);
            }
        }
        order
    }

    /// Descriptor for a connected device of `device_type`.
    pub fn device(&self, device_type: &str) -> DeviceDescriptor {
        let blocks = self
            .device_events
            .get(device_type)
            .cloned()
            .unwrap_or_default();
        DeviceDescriptor::new(device_type, device_type).with_event_blocks(blocks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config = EngineConfig::parse("").unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.storage_path(), PathBuf::from(DEFAULT_STORAGE_FILE));
        assert_eq!(config.assembly_options(), AssemblyOptions::default());
    }

    #[test]
    fn unknown_device_has_no_event_blocks() {
        let device = EngineConfig::default().device("microbit");
        assert_eq!(device.device_type, "microbit");
        assert!(device.event_blocks.is_empty());
    }
}
