//! Storage backends for the persisted tier.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::Result;

/// Single-key string storage.
///
/// Every operation returns its failure instead of panicking so the store can
/// decide what a failure means (it always treats them as best-effort).
pub trait PreferenceStorage {
    /// Read the value for `key`. `Ok(None)` means the key is absent.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, replacing any previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<()>;

    /// Remove `key`. Removing an absent key succeeds.
    fn remove(&mut self, key: &str) -> Result<()>;
}
