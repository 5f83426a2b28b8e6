//! The experience tier preference store.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::rc::Rc;

use tracing::{debug, error, info, warn};

use palette_model::{Tier, TierProfile};

use crate::config::PreferenceConfig;
use crate::storage::{MemoryStorage, PreferenceStorage};

/// Error type listeners may return to report a failure.
pub type ListenerError = Box<dyn std::error::Error>;

/// Result returned by a tier-change listener.
pub type ListenerResult = std::result::Result<(), ListenerError>;

type Listener = Rc<dyn Fn(Tier) -> ListenerResult>;

/// Handle for one registered listener.
///
/// Handles are never reused within a store, so removing a stale handle can
/// not detach somebody else's listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Holds the session's experience tier, persists it and notifies listeners.
///
/// The store is single-threaded: it uses interior mutability and is meant to
/// be shared through `Rc<PreferenceStore>`. Listeners may call back into the
/// store (read the tier, add or remove listeners) while being notified.
pub struct PreferenceStore {
    storage_key: String,
    storage: RefCell<Box<dyn PreferenceStorage>>,
    current: Cell<Option<Tier>>,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_subscription: Cell<u64>,
}

impl PreferenceStore {
    /// Create a store, restoring any tier already held by `storage`.
    ///
    /// A failed read or an unrecognized stored value starts the session
    /// unset.
    pub fn new<S>(storage: S, config: PreferenceConfig) -> Self
    where
        S: PreferenceStorage + 'static,
    {
        let current = read_stored_tier(&storage, &config.storage_key);
        Self {
            storage_key: config.storage_key,
            storage: RefCell::new(Box::new(storage)),
            current: Cell::new(current),
            listeners: RefCell::new(Vec::new()),
            next_subscription: Cell::new(0),
        }
    }

    /// Store backed by fresh session memory.
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new(), PreferenceConfig::default())
    }

    pub fn storage_key(&self) -> &str {
        &self.storage_key
    }

    /// Current tier, or `None` when nothing has been chosen.
    pub fn current(&self) -> Option<Tier> {
        self.current.get()
    }

    pub fn has_selection(&self) -> bool {
        self.current.get().is_some()
    }

    pub fn is_novice(&self) -> bool {
        self.current.get() == Some(Tier::Novice)
    }

    pub fn is_standard(&self) -> bool {
        self.current.get() == Some(Tier::Standard)
    }

    pub fn profile(&self) -> TierProfile {
        TierProfile::for_tier(self.current.get())
    }

    /// Set the tier, persist it and notify every listener.
    ///
    /// Persistence is best-effort: a failed write is logged and the
    /// in-memory tier and notifications proceed as usual.
    pub fn set_tier(&self, tier: Tier) {
        self.current.set(Some(tier));

        let persisted = self
            .storage
            .borrow_mut()
            .write(&self.storage_key, tier.as_str());
        if let Err(error) = persisted {
            warn!(
                key = %self.storage_key,
                error = %error,
                detail = %error.user_message(),
                "could not persist experience tier; keeping it for this session only"
            );
        }

        info!(tier = %tier, "experience tier selected");
        self.notify(tier);
    }

    /// Set the tier from an untyped value such as a form field or a stored
    /// string.
    ///
    /// Values outside the closed tier set are logged and ignored: state is
    /// left untouched and no listener runs. Returns whether the value was
    /// accepted.
    pub fn select(&self, value: &str) -> bool {
        match value.parse::<Tier>() {
            Ok(tier) => {
                self.set_tier(tier);
                true
            }
            Err(error) => {
                warn!(value, error = %error, "ignoring invalid experience tier");
                false
            }
        }
    }

    /// Register a listener called with the new tier on every change.
    ///
    /// Registering the same closure twice yields two independent
    /// subscriptions.
    pub fn add_listener<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(Tier) -> ListenerResult + 'static,
    {
        let id = SubscriptionId(self.next_subscription.get());
        self.next_subscription.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        debug!(subscription = %id, "tier listener added");
        id
    }

    /// Remove a listener. Unknown or already removed handles are ignored.
    ///
    /// Returns whether a listener was removed.
    pub fn remove_listener(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(registered, _)| *registered != id);
        let removed = listeners.len() != before;
        if removed {
            debug!(subscription = %id, "tier listener removed");
        }
        removed
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    /// Clear the persisted and in-memory tier and drop every listener.
    ///
    /// Listeners are not re-attached; observers must subscribe again.
    pub fn reset(&self) {
        let removed = self.storage.borrow_mut().remove(&self.storage_key);
        if let Err(error) = removed {
            warn!(
                key = %self.storage_key,
                error = %error,
                detail = %error.user_message(),
                "could not clear persisted experience tier"
            );
        }
        self.current.set(None);
        let dropped = {
            let mut listeners = self.listeners.borrow_mut();
            let count = listeners.len();
            listeners.clear();
            count
        };
        info!(dropped_listeners = dropped, "experience tier reset");
    }

    /// Invoke a snapshot of the listeners in registration order.
    fn notify(&self, tier: Tier) {
        let snapshot: Vec<(SubscriptionId, Listener)> = self.listeners.borrow().clone();
        for (id, listener) in snapshot {
            match panic::catch_unwind(AssertUnwindSafe(|| listener(tier))) {
                Ok(Ok(())) => {}
                Ok(Err(failure)) => {
                    error!(subscription = %id, error = %failure, "tier listener failed");
                }
                Err(payload) => {
                    error!(
                        subscription = %id,
                        panic = panic_message(&*payload),
                        "tier listener panicked"
                    );
                }
            }
        }
    }
}

impl fmt::Debug for PreferenceStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("storage_key", &self.storage_key)
            .field("current", &self.current.get())
            .field("listeners", &self.listener_count())
            .finish_non_exhaustive()
    }
}

fn read_stored_tier(storage: &dyn PreferenceStorage, key: &str) -> Option<Tier> {
    match storage.read(key) {
        Ok(Some(value)) => match value.parse::<Tier>() {
            Ok(tier) => {
                debug!(tier = %tier, "restored experience tier");
                Some(tier)
            }
            Err(error) => {
                warn!(key, error = %error, "ignoring unrecognized stored experience tier");
                None
            }
        },
        Ok(None) => None,
        Err(error) => {
            warn!(
                key,
                error = %error,
                detail = %error.user_message(),
                "could not read stored experience tier"
            );
            None
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "non-string panic payload"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subscription_ids_are_not_reused() {
        let store = PreferenceStore::in_memory();
        let first = store.add_listener(|_| Ok(()));
        assert!(store.remove_listener(first));
        let second = store.add_listener(|_| Ok(()));
        assert_ne!(first, second);
        assert!(!store.remove_listener(first));
        assert_eq!(store.listener_count(), 1);
    }

    #[test]
    fn profile_follows_tier() {
        let store = PreferenceStore::in_memory();
        assert_eq!(store.profile(), TierProfile::for_tier(None));
        store.set_tier(Tier::Novice);
        assert_eq!(store.profile(), TierProfile::for_tier(Some(Tier::Novice)));
    }

    #[test]
    fn panic_message_reads_common_payloads() {
        let boxed: Box<dyn std::any::Any + Send> = Box::new("boom");
        assert_eq!(panic_message(&*boxed), "boom");
        let boxed: Box<dyn std::any::Any + Send> = Box::new(String::from("bang"));
        assert_eq!(panic_message(&*boxed), "bang");
        let boxed: Box<dyn std::any::Any + Send> = Box::new(7_u8);
        assert_eq!(panic_message(&*boxed), "non-string panic payload");
    }
}
