//! Wiring of configuration, preference store and assembler.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use tracing::debug;

use palette_assembly::{Document, DocumentAssembler, render_compact_palette};
use palette_model::{ExecutionMode, OverrideEntry, SectionId, Tier};
use palette_prefs::{FileStorage, PreferenceStore};
use palette_sections::SectionContext;

use crate::config::EngineConfig;

/// An override given on the command line as `ID=FILE`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideArg {
    pub id: SectionId,
    pub path: PathBuf,
}

impl OverrideArg {
    /// Read the override's markup.
    pub fn load(&self) -> Result<OverrideEntry> {
        let xml = std::fs::read_to_string(&self.path)
            .with_context(|| format!("read override {} from {}", self.id, self.path.display()))?;
        Ok(OverrideEntry::new(self.id.clone(), xml.trim_end().to_string()))
    }
}

/// Parse `ID=FILE`.
pub fn parse_override_arg(value: &str) -> std::result::Result<OverrideArg, String> {
    let (id, path) = value
        .split_once('=')
        .ok_or_else(|| format!("expected ID=FILE, got {value:?}"))?;
    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing section id in {value:?}"));
    }
    if path.is_empty() {
        return Err(format!("missing file in {value:?}"));
    }
    Ok(OverrideArg {
        id: SectionId::from(id),
        path: PathBuf::from(path),
    })
}

/// Parse an execution mode name (`realtime` or `upload`).
pub fn parse_mode(value: &str) -> std::result::Result<ExecutionMode, String> {
    value.parse::<ExecutionMode>().map_err(|error| error.to_string())
}

/// One palette request.
#[derive(Debug, Clone)]
pub struct RenderRequest {
    /// Explicit tier; `None` uses the stored one.
    pub tier: Option<Tier>,
    pub context: SectionContext,
    pub overrides: Vec<OverrideEntry>,
}

/// A configured engine instance.
pub struct Engine {
    config: EngineConfig,
    store: PreferenceStore,
    assembler: DocumentAssembler,
}

impl Engine {
    /// Open the engine with file-backed preferences at the configured path.
    pub fn open(config: EngineConfig) -> Result<Self> {
        let path = config.storage_path();
        if path.is_dir() {
            bail!("preference path {} is a directory", path.display());
        }
        debug!(path = %path.display(), "opening preference file");
        let store = PreferenceStore::new(FileStorage::new(path), config.preference_config());
        Ok(Self::with_store(config, store))
    }

    pub fn with_store(config: EngineConfig, store: PreferenceStore) -> Self {
        let assembler = DocumentAssembler::new(config.library())
            .with_order(config.order())
            .with_options(config.assembly_options());
        Self {
            config,
            store,
            assembler,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn store(&self) -> &PreferenceStore {
        &self.store
    }

    pub fn assembler(&self) -> &DocumentAssembler {
        &self.assembler
    }

    pub fn storage_path(&self) -> PathBuf {
        self.config.storage_path()
    }

    /// Context for `target_id` with the configured messages.
    pub fn context(&self, target_id: &str) -> SectionContext {
        SectionContext::new(target_id).messages(self.config.messages.clone())
    }

    pub fn render(&self, request: &RenderRequest) -> Result<Document> {
        let tier = request.tier.or_else(|| self.store.current());
        let document = self
            .assembler
            .assemble(tier, &request.context, &request.overrides)
            .context("assemble palette")?;
        Ok(document)
    }

    /// Compact palette from the configured categories, or the built-in
    /// young-learner table when none are configured.
    pub fn compact(&self) -> Result<String> {
        let table = Some(&self.config.categories).filter(|table| !table.is_empty());
        render_compact_palette(table, &self.config.messages).context("render compact palette")
    }
}

/// Read every override file in order.
pub fn load_overrides(args: &[OverrideArg]) -> Result<Vec<OverrideEntry>> {
    args.iter().map(OverrideArg::load).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_id_and_file() {
        let arg = parse_override_arg("pen=ext/pen.xml").unwrap();
        assert_eq!(arg.id.as_str(), "pen");
        assert_eq!(arg.path, PathBuf::from("ext/pen.xml"));
    }

    #[test]
    fn path_may_contain_equals() {
        let arg = parse_override_arg("pen=a=b.xml").unwrap();
        assert_eq!(arg.path, PathBuf::from("a=b.xml"));
    }

    #[test]
    fn parses_execution_modes() {
        assert_eq!(parse_mode("upload"), Ok(ExecutionMode::Upload));
        assert_eq!(parse_mode("Realtime"), Ok(ExecutionMode::Realtime));
        let err = parse_mode("offline").unwrap_err();
        assert!(err.contains("offline"), "{err}");
    }

    #[test]
    fn rejects_malformed_values() {
        assert!(parse_override_arg("pen").is_err());
        assert!(parse_override_arg("=pen.xml").is_err());
        assert!(parse_override_arg("pen=").is_err());
    }
}
