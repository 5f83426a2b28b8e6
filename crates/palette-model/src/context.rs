//! Runtime parameters that shape a palette: execution mode, connected
//! device, pre-filled example values and localized display strings.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// How programs built from the palette are executed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Interactive: programs run live inside the editor.
    #[default]
    Realtime,
    /// Programs are compiled and uploaded to a connected device.
    Upload,
}

impl ExecutionMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionMode::Realtime => "realtime",
            ExecutionMode::Upload => "upload",
        }
    }

    pub fn is_realtime(&self) -> bool {
        matches!(self, ExecutionMode::Realtime)
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExecutionMode {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "realtime" => Ok(ExecutionMode::Realtime),
            "upload" => Ok(ExecutionMode::Upload),
            _ => Err(ModelError::ModeParse(s.to_string())),
        }
    }
}

/// A connected hardware device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeviceDescriptor {
    pub id: String,
    pub device_type: String,
    /// Hat-block opcodes the device offers as program entry points.
    #[serde(default)]
    pub event_blocks: Vec<String>,
}

impl DeviceDescriptor {
    pub fn new(id: impl Into<String>, device_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            device_type: device_type.into(),
            event_blocks: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_event_blocks<I, S>(mut self, blocks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.event_blocks = blocks.into_iter().map(Into::into).collect();
        self
    }
}

/// Example values shown in menus of freshly dragged operations.
///
/// Values are raw user data (asset names); escaping happens at
/// serialization time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExampleDefaults {
    pub costume: String,
    pub backdrop: String,
    pub sound: String,
}

/// Already-localized strings embedded into rendered sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Shown in place of motion operations when the stage is selected.
    pub stage_selected: String,
    /// Default text for "say" operations.
    pub hello: String,
    /// Default text for "think" operations.
    pub hmm: String,
    /// Default question for "ask and wait".
    pub question: String,
    /// Example words pre-filled into text operators.
    pub apple: String,
    pub banana: String,
    /// Display names keyed by category id, used by the compact palette.
    /// Configured names are merged over the defaults.
    #[serde(deserialize_with = "merge_category_names")]
    pub category_names: BTreeMap<String, String>,
}

fn default_category_names() -> BTreeMap<String, String> {
    [
        ("motion", "Motion"),
        ("looks", "Looks"),
        ("sounds", "Sound"),
        ("events", "Events"),
        ("control", "Control"),
    ]
    .into_iter()
    .map(|(id, name)| (id.to_string(), name.to_string()))
    .collect()
}

fn merge_category_names<'de, D>(deserializer: D) -> Result<BTreeMap<String, String>, D::Error>
where
    D: Deserializer<'de>,
{
    let configured = BTreeMap::<String, String>::deserialize(deserializer)?;
    let mut names = default_category_names();
    names.extend(configured);
    Ok(names)
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            stage_selected: "Stage selected: no motion blocks".to_string(),
            hello: "Hello!".to_string(),
            hmm: "Hmm...".to_string(),
            question: "What's your name?".to_string(),
            apple: "apple".to_string(),
            banana: "banana".to_string(),
            category_names: default_category_names(),
        }
    }
}

impl Messages {
    /// Display name for a category, falling back to its id.
    pub fn category_name<'a>(&'a self, id: &'a str) -> &'a str {
        self.category_names
            .get(id)
            .map(String::as_str)
            .unwrap_or(id)
    }
}
