//! Preference store configuration.

use serde::{Deserialize, Serialize};

/// Default storage key for the experience tier.
pub const DEFAULT_STORAGE_KEY: &str = "experience_tier";

/// Configuration for a [`PreferenceStore`](crate::PreferenceStore).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PreferenceConfig {
    /// Storage key, fixed per deployment.
    pub storage_key: String,
}

impl Default for PreferenceConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

impl PreferenceConfig {
    pub fn with_storage_key(key: impl Into<String>) -> Self {
        Self {
            storage_key: key.into(),
        }
    }
}
