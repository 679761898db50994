//! Main Store struct owning the subscription collection.

use crate::demo::demo_subscriptions;
use crate::error::{Result, StoreError};
use crate::types::{Subscription, SubscriptionDraft, SubscriptionId};
use crate::watch::{StoreEvent, WatchConfig, WatchHandle, WatchId, WatchManager};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Payment method stamped on newly added entries. Real payment-method
/// handling is out of scope; this mirrors what the UI mock shows.
pub const DEFAULT_PAYMENT_METHOD: &str = "Visa **** 5678";

/// The in-memory subscription store.
///
/// Owns the authoritative collection and is the only mutation surface.
/// The collection keeps insertion order; presentation order (renewal lists)
/// is a view-level concern, see [`crate::views`].
pub struct Store {
    /// Live collection, insertion order.
    subscriptions: RwLock<Vec<Subscription>>,

    /// Counter for assigning subscription IDs. Never reused, even after
    /// deletes.
    next_id: AtomicU64,

    /// Watch manager for broadcasting change events.
    watches: WatchManager,
}

impl Store {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            subscriptions: RwLock::new(Vec::new()),
            next_id: AtomicU64::new(1),
            watches: WatchManager::new(),
        }
    }

    /// Create a store seeded with the demo catalog, renewal dates laid out
    /// relative to `as_of`.
    pub fn with_demo_data(as_of: DateTime<Utc>) -> Self {
        let seed = demo_subscriptions(as_of);
        let next_id = seed.len() as u64 + 1;

        Self {
            subscriptions: RwLock::new(seed),
            next_id: AtomicU64::new(next_id),
            watches: WatchManager::new(),
        }
    }

    // --- Mutations ---

    /// Add a subscription from a draft.
    ///
    /// Assigns a fresh id and the creation defaults: reminders on, the
    /// placeholder payment method, and the generic logo. Returns the new
    /// record as stored.
    pub fn add(&self, draft: SubscriptionDraft) -> Result<Subscription> {
        draft.validate()?;

        let id = SubscriptionId::new(self.next_id.fetch_add(1, Ordering::SeqCst).to_string());
        let subscription = Subscription {
            id,
            name: draft.name,
            logo: Default::default(),
            cost: draft.cost,
            renewal_date: draft.renewal_date,
            category: draft.category,
            payment_method: DEFAULT_PAYMENT_METHOD.to_string(),
            reminder_enabled: true,
        };

        self.subscriptions.write().push(subscription.clone());

        debug!(id = %subscription.id, name = %subscription.name, "subscription added");
        self.watches.broadcast_added(&subscription);

        Ok(subscription)
    }

    /// Replace a subscription wholesale, keyed by its id.
    ///
    /// This is a full-record replace, not a partial patch; reminder toggling
    /// goes through here too. Unknown ids are an error and nothing changes.
    pub fn update(&self, updated: Subscription) -> Result<Subscription> {
        SubscriptionDraft::new(
            updated.name.clone(),
            updated.category,
            updated.renewal_date,
            updated.cost,
        )
        .validate()?;

        {
            let mut subscriptions = self.subscriptions.write();
            let slot = subscriptions
                .iter_mut()
                .find(|s| s.id == updated.id)
                .ok_or_else(|| StoreError::SubscriptionNotFound(updated.id.clone()))?;
            *slot = updated.clone();
        }

        debug!(id = %updated.id, "subscription updated");
        self.watches.broadcast_updated(&updated);

        Ok(updated)
    }

    /// Remove the subscription with the given id.
    ///
    /// Returns the removed record, or `None` if the id is not present;
    /// deleting a missing id is a silent no-op.
    pub fn delete(&self, id: &SubscriptionId) -> Option<Subscription> {
        let removed = {
            let mut subscriptions = self.subscriptions.write();
            let index = subscriptions.iter().position(|s| &s.id == id)?;
            subscriptions.remove(index)
        };

        debug!(id = %removed.id, name = %removed.name, "subscription removed");
        self.watches.broadcast_removed(&removed);

        Some(removed)
    }

    // --- Reads ---

    /// The current collection, in insertion order.
    pub fn list(&self) -> Vec<Subscription> {
        self.subscriptions.read().clone()
    }

    /// Get a subscription by id.
    pub fn get(&self, id: &SubscriptionId) -> Option<Subscription> {
        self.subscriptions.read().iter().find(|s| &s.id == id).cloned()
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.subscriptions.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscriptions.read().is_empty()
    }

    // --- Watches ---

    /// Register a change feed over the collection.
    ///
    /// The handle immediately receives a `Snapshot` of the entries matching
    /// its filter, then live events for each mutation.
    pub fn watch(&self, config: WatchConfig) -> WatchHandle {
        // Hold the read lock across registration so no mutation can slip
        // between the snapshot and the first live event.
        let subscriptions = self.subscriptions.read();
        let handle = self.watches.register(config.clone());

        let snapshot = StoreEvent::Snapshot {
            subscriptions: config.filter.snapshot_of(&subscriptions),
        };
        self.watches.send_to(handle.id, snapshot);

        handle
    }

    /// Drop a watch.
    pub fn unwatch(&self, id: WatchId) {
        self.watches.unregister(id);
    }

    /// Number of active watches.
    pub fn watch_count(&self) -> usize {
        self.watches.watch_count()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
