//! Watch manager for broadcasting store events.

use crossbeam_channel::{bounded, Sender};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::Subscription;

use super::types::{DropReason, StoreEvent, WatchConfig, WatchHandle, WatchId};

/// Internal watch state.
struct Watch {
    config: WatchConfig,
    sender: Sender<StoreEvent>,
}

impl Watch {
    /// Try to send an event. Returns false if the buffer is full or the
    /// receiver is gone (the watch will be dropped).
    fn try_send(&self, event: StoreEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(crossbeam_channel::TrySendError::Full(_)) => false,
            Err(crossbeam_channel::TrySendError::Disconnected(_)) => false,
        }
    }
}

/// Manages watches and broadcasts store events.
pub struct WatchManager {
    /// Active watches by ID.
    watches: RwLock<HashMap<WatchId, Watch>>,
    /// Counter for generating watch IDs.
    next_id: AtomicU64,
}

impl WatchManager {
    /// Create a new watch manager.
    pub fn new() -> Self {
        Self {
            watches: RwLock::new(HashMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Register a new watch.
    ///
    /// Returns a handle for receiving events. The caller (the store) is
    /// responsible for sending the initial `Snapshot` via `send_to`.
    pub fn register(&self, config: WatchConfig) -> WatchHandle {
        let id = WatchId(self.next_id.fetch_add(1, Ordering::SeqCst));
        let (sender, receiver) = bounded(config.buffer_size);

        self.watches.write().insert(id, Watch { config, sender });

        WatchHandle { id, receiver }
    }

    /// Unregister a watch and clean up.
    pub fn unregister(&self, id: WatchId) {
        let mut watches = self.watches.write();
        if let Some(watch) = watches.remove(&id) {
            // Send dropped event (best effort)
            let _ = watch.sender.try_send(StoreEvent::Dropped {
                reason: DropReason::Unwatched,
            });
        }
    }

    /// Get the watch count.
    pub fn watch_count(&self) -> usize {
        self.watches.read().len()
    }

    /// Send an event directly to one watch (used for the initial snapshot).
    /// Returns false if the watch is gone.
    pub fn send_to(&self, id: WatchId, event: StoreEvent) -> bool {
        let watches = self.watches.read();
        if let Some(watch) = watches.get(&id) {
            watch.try_send(event)
        } else {
            false
        }
    }

    // --- Broadcasting ---

    /// Broadcast an added subscription to matching watches.
    pub fn broadcast_added(&self, subscription: &Subscription) {
        let event = StoreEvent::Added {
            subscription: subscription.clone(),
        };
        self.broadcast(|w| w.config.filter.matches_added(subscription), event);
    }

    /// Broadcast an updated subscription to matching watches.
    pub fn broadcast_updated(&self, subscription: &Subscription) {
        let event = StoreEvent::Updated {
            subscription: subscription.clone(),
        };
        self.broadcast(|w| w.config.filter.matches_updated(subscription), event);
    }

    /// Broadcast a removed subscription to matching watches.
    pub fn broadcast_removed(&self, subscription: &Subscription) {
        let event = StoreEvent::Removed {
            subscription: subscription.clone(),
        };
        self.broadcast(|w| w.config.filter.matches_removed(subscription), event);
    }

    /// Internal broadcast helper. Drops watchers that fail to receive.
    fn broadcast<F>(&self, filter: F, event: StoreEvent)
    where
        F: Fn(&Watch) -> bool,
    {
        let mut to_remove = Vec::new();

        {
            let watches = self.watches.read();
            for (id, watch) in watches.iter() {
                if filter(watch) && !watch.try_send(event.clone()) {
                    to_remove.push(*id);
                }
            }
        }

        // Remove dropped watches
        if !to_remove.is_empty() {
            let mut watches = self.watches.write();
            for id in to_remove {
                if let Some(watch) = watches.remove(&id) {
                    // Try to notify about the drop (might fail, that's ok)
                    let _ = watch.sender.try_send(StoreEvent::Dropped {
                        reason: DropReason::BufferOverflow,
                    });
                }
            }
        }
    }
}

impl Default for WatchManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, LogoKey, Subscription, SubscriptionId};
    use crate::watch::WatchFilter;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;
    use std::time::Duration;

    fn make_subscription(id: &str, category: Category) -> Subscription {
        Subscription {
            id: SubscriptionId::new(id),
            name: "Spotify".to_string(),
            logo: LogoKey::Spotify,
            cost: Decimal::new(1099, 2),
            renewal_date: Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap(),
            category,
            payment_method: "Visa **** 1234".to_string(),
            reminder_enabled: true,
        }
    }

    #[test]
    fn test_register_unregister() {
        let manager = WatchManager::new();

        let handle = manager.register(WatchConfig::default());
        assert_eq!(manager.watch_count(), 1);

        manager.unregister(handle.id);
        assert_eq!(manager.watch_count(), 0);

        let event = handle.recv_timeout(Duration::from_millis(100)).unwrap();
        assert!(matches!(
            event,
            StoreEvent::Dropped {
                reason: DropReason::Unwatched
            }
        ));
    }

    #[test]
    fn test_broadcast_to_matching() {
        let manager = WatchManager::new();

        let config = WatchConfig {
            filter: WatchFilter::categories(vec![Category::Work]),
            ..Default::default()
        };
        let handle = manager.register(config);

        // Non-matching category is filtered out
        manager.broadcast_added(&make_subscription("1", Category::Entertainment));
        assert!(handle.recv_timeout(Duration::from_millis(50)).is_err());

        // Matching category comes through
        let work = make_subscription("2", Category::Work);
        manager.broadcast_added(&work);

        let event = handle.recv_timeout(Duration::from_millis(100)).unwrap();
        assert_eq!(event.subscription_id(), Some(&work.id));
        match event {
            StoreEvent::Added { subscription } => assert_eq!(subscription.id, work.id),
            _ => panic!("Expected Added event, got {:?}", event),
        }
    }

    #[test]
    fn test_event_kind_filter() {
        let manager = WatchManager::new();

        let config = WatchConfig {
            filter: WatchFilter::removals(),
            ..Default::default()
        };
        let handle = manager.register(config);

        let sub = make_subscription("1", Category::Work);
        manager.broadcast_added(&sub);
        manager.broadcast_updated(&sub);
        manager.broadcast_removed(&sub);

        // Only the removal is delivered
        let event = handle.recv_timeout(Duration::from_millis(100)).unwrap();
        assert!(matches!(event, StoreEvent::Removed { .. }));
        assert!(handle.try_recv().is_err());
    }

    #[test]
    fn test_drop_slow_watcher() {
        let manager = WatchManager::new();
        let config = WatchConfig {
            buffer_size: 2,
            filter: WatchFilter::all(),
        };
        let handle = manager.register(config);

        // Flood with events without draining
        for i in 0..10 {
            manager.broadcast_added(&make_subscription(&i.to_string(), Category::Work));
        }

        // Watcher should be dropped
        assert_eq!(manager.watch_count(), 0);
        drop(handle);
    }
}
