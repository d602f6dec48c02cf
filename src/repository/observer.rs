//! Listener registration for store changes.
//!
//! Views subscribe once and are called synchronously after every mutation,
//! so each change is visible to all current observers before the next
//! observable event. Listeners run on the mutating call's thread.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Store whose state changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    /// The signed-in session changed.
    Session,
    /// The brand collection changed.
    Brands,
    /// The product collection changed.
    Products,
}

/// Callback invoked after a mutation.
pub type Listener = Arc<dyn Fn(StoreEvent) + Send + Sync>;

/// Handle returned by [`ObserverRegistry::subscribe`]; pass it back to
/// `unsubscribe` to stop receiving notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// Registry of change listeners shared by the three stores.
#[derive(Default)]
pub struct ObserverRegistry {
    next_id: AtomicU64,
    listeners: RwLock<Vec<(u64, Listener)>>,
}

impl ObserverRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener and return its subscription handle.
    pub fn subscribe(&self, listener: Listener) -> SubscriptionId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let mut listeners = self
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        listeners.push((id, listener));
        SubscriptionId(id)
    }

    /// Remove a previously registered listener. Returns `false` when the
    /// handle was already removed.
    pub fn unsubscribe(&self, subscription: SubscriptionId) -> bool {
        let mut listeners = self
            .listeners
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(id, _)| *id != subscription.0);
        listeners.len() != before
    }

    /// Notify every current listener of `event`. The listener list is
    /// snapshotted first so a listener may subscribe or unsubscribe
    /// without deadlocking.
    pub fn notify(&self, event: StoreEvent) {
        let snapshot: Vec<Listener> = {
            let listeners = self
                .listeners
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            listeners.iter().map(|(_, l)| Arc::clone(l)).collect()
        };
        for listener in snapshot {
            listener(event);
        }
    }
}
