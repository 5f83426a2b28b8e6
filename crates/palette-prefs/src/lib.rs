//! Experience tier preference store.
//!
//! This crate keeps the user's selected [`Tier`](palette_model::Tier) for the
//! session, persists it through a pluggable storage backend and notifies
//! registered observers when it changes.
//!
//! # Failure model
//!
//! - Invalid tier values are logged and ignored.
//! - Storage failures are logged; the live session keeps working from memory.
//! - A failing listener is logged and does not stop the other listeners.
//!
//! None of these reach the caller: the store's public operations are
//! infallible.
//!
//! # Example
//!
//! ```ignore
//! use std::rc::Rc;
//! use palette_prefs::{PreferenceStore, MemoryStorage, PreferenceConfig};
//!
//! let store = Rc::new(PreferenceStore::new(MemoryStorage::new(), PreferenceConfig::default()));
//! let id = store.add_listener(|tier| {
//!     println!("tier is now {tier}");
//!     Ok(())
//! });
//! store.select("novice");
//! store.remove_listener(id);
//! ```

mod config;
mod error;
mod storage;
mod store;

pub use config::{DEFAULT_STORAGE_KEY, PreferenceConfig};
pub use error::{PreferenceError, Result};
pub use storage::{FileStorage, MemoryStorage, PreferenceStorage};
pub use store::{ListenerError, ListenerResult, PreferenceStore, SubscriptionId};
