//! TOML-file storage.
//!
//! The file is a flat table of string values:
//!
//! ```text
//! experience_tier = "novice"
//! ```

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::PreferenceStorage;
use crate::error::{PreferenceError, Result};

/// Storage backed by a TOML file on disk.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<BTreeMap<String, String>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                return Ok(BTreeMap::new());
            }
            Err(source) => {
                return Err(PreferenceError::Io {
                    operation: "read",
                    path: self.path.clone(),
                    source,
                });
            }
        };
        toml::from_str(&content).map_err(|source| PreferenceError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    /// Load entries for a mutation. A damaged file is replaced rather than
    /// blocking every future write.
    fn load_for_update(&self) -> Result<BTreeMap<String, String>> {
        match self.load() {
            Err(PreferenceError::Parse { path, source }) => {
                tracing::debug!(path = %path.display(), %source, "replacing unreadable preference file");
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    /// Write entries using temp file + rename.
    fn store(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        let content =
            toml::to_string(entries).map_err(|source| PreferenceError::Serialize { source })?;

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|source| PreferenceError::Io {
                operation: "create directory",
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let temp_path = self.path.with_extension("toml.tmp");
        let mut file = File::create(&temp_path).map_err(|source| PreferenceError::Io {
            operation: "create",
            path: temp_path.clone(),
            source,
        })?;
        file.write_all(content.as_bytes())
            .map_err(|source| PreferenceError::Io {
                operation: "write",
                path: temp_path.clone(),
                source,
            })?;
        file.sync_all().map_err(|source| PreferenceError::Io {
            operation: "sync",
            path: temp_path.clone(),
            source,
        })?;

        fs::rename(&temp_path, &self.path).map_err(|source| {
            PreferenceError::AtomicWriteFailed {
                temp_path: temp_path.clone(),
                target_path: self.path.clone(),
                source,
            }
        })?;

        tracing::debug!(path = %self.path.display(), "saved preferences");
        Ok(())
    }
}

impl PreferenceStorage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.load_for_update()?;
        entries.insert(key.to_string(), value.to_string());
        self.store(&entries)
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        let mut entries = self.load_for_update()?;
        if entries.remove(key).is_none() {
            return Ok(());
        }
        self.store(&entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_absent() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("prefs.toml"));
        assert_eq!(storage.read("experience_tier").unwrap(), None);
    }

    #[test]
    fn write_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/config/prefs.toml");
        let mut storage = FileStorage::new(&path);
        storage.write("experience_tier", "novice").unwrap();
        assert!(path.exists());
        assert!(!path.with_extension("toml.tmp").exists());
        assert_eq!(
            storage.read("experience_tier").unwrap().as_deref(),
            Some("novice")
        );
    }

    #[test]
    fn write_keeps_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "theme = \"dark\"\n").unwrap();
        let mut storage = FileStorage::new(&path);
        storage.write("experience_tier", "standard").unwrap();
        assert_eq!(storage.read("theme").unwrap().as_deref(), Some("dark"));
        storage.remove("experience_tier").unwrap();
        assert_eq!(storage.read("experience_tier").unwrap(), None);
        assert_eq!(storage.read("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn damaged_file_fails_read_but_is_replaced_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        fs::write(&path, "not = [valid").unwrap();
        let mut storage = FileStorage::new(&path);
        assert!(matches!(
            storage.read("experience_tier"),
            Err(PreferenceError::Parse { .. })
        ));
        storage.write("experience_tier", "novice").unwrap();
        assert_eq!(
            storage.read("experience_tier").unwrap().as_deref(),
            Some("novice")
        );
    }

    #[test]
    fn remove_without_file_does_not_create_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        let mut storage = FileStorage::new(&path);
        storage.remove("experience_tier").unwrap();
        assert!(!path.exists());
    }
}
