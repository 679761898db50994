//! Watch types for live collection updates.

use crate::types::{Category, Subscription, SubscriptionId};
use serde::{Deserialize, Serialize};

/// Configuration for a watch.
#[derive(Clone, Debug)]
pub struct WatchConfig {
    /// Max buffered events before dropping the watcher.
    /// Default: 256
    pub buffer_size: usize,

    /// Filter criteria.
    pub filter: WatchFilter,
}

impl Default for WatchConfig {
    fn default() -> Self {
        Self {
            buffer_size: 256,
            filter: WatchFilter::all(),
        }
    }
}

/// Filter criteria for watches.
#[derive(Clone, Debug, Default)]
pub struct WatchFilter {
    /// Only events for these categories (None = all categories).
    pub categories: Option<Vec<Category>>,

    /// Include added events.
    pub include_added: bool,

    /// Include updated events.
    pub include_updated: bool,

    /// Include removed events.
    pub include_removed: bool,
}

impl WatchFilter {
    /// Watch every mutation.
    pub fn all() -> Self {
        Self {
            include_added: true,
            include_updated: true,
            include_removed: true,
            ..Default::default()
        }
    }

    /// Watch every mutation touching the given categories.
    pub fn categories(categories: Vec<Category>) -> Self {
        Self {
            categories: Some(categories),
            ..Self::all()
        }
    }

    /// Watch additions only.
    pub fn additions() -> Self {
        Self {
            include_added: true,
            ..Default::default()
        }
    }

    /// Watch removals only.
    pub fn removals() -> Self {
        Self {
            include_removed: true,
            ..Default::default()
        }
    }

    fn matches_category(&self, subscription: &Subscription) -> bool {
        match &self.categories {
            Some(categories) => categories.contains(&subscription.category),
            None => true,
        }
    }

    /// Whether an added record passes this filter.
    pub fn matches_added(&self, subscription: &Subscription) -> bool {
        self.include_added && self.matches_category(subscription)
    }

    /// Whether an updated record passes this filter.
    pub fn matches_updated(&self, subscription: &Subscription) -> bool {
        self.include_updated && self.matches_category(subscription)
    }

    /// Whether a removed record passes this filter.
    pub fn matches_removed(&self, subscription: &Subscription) -> bool {
        self.include_removed && self.matches_category(subscription)
    }

    /// Restrict a snapshot to the entries this filter cares about.
    pub fn snapshot_of(&self, subscriptions: &[Subscription]) -> Vec<Subscription> {
        subscriptions
            .iter()
            .filter(|s| self.matches_category(s))
            .cloned()
            .collect()
    }
}

/// Events emitted to watchers.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StoreEvent {
    /// The current collection at watch-registration time.
    Snapshot { subscriptions: Vec<Subscription> },

    /// A subscription was added.
    Added { subscription: Subscription },

    /// A subscription was replaced wholesale.
    Updated { subscription: Subscription },

    /// A subscription was removed.
    Removed { subscription: Subscription },

    /// The watch was dropped.
    Dropped { reason: DropReason },
}

/// Why a watch was dropped.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DropReason {
    /// Send buffer overflowed (slow consumer).
    BufferOverflow,
    /// Explicitly unwatched.
    Unwatched,
}

/// Unique identifier for a watch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WatchId(pub u64);

/// Handle to manage a watch.
pub struct WatchHandle {
    pub id: WatchId,
    /// Channel to receive events.
    pub receiver: crossbeam_channel::Receiver<StoreEvent>,
}

impl WatchHandle {
    /// Receive the next event (blocking).
    pub fn recv(&self) -> Result<StoreEvent, crossbeam_channel::RecvError> {
        self.receiver.recv()
    }

    /// Try to receive an event (non-blocking).
    pub fn try_recv(&self) -> Result<StoreEvent, crossbeam_channel::TryRecvError> {
        self.receiver.try_recv()
    }

    /// Receive with timeout.
    pub fn recv_timeout(
        &self,
        timeout: std::time::Duration,
    ) -> Result<StoreEvent, crossbeam_channel::RecvTimeoutError> {
        self.receiver.recv_timeout(timeout)
    }
}

impl StoreEvent {
    /// The id of the subscription this event concerns, if any.
    pub fn subscription_id(&self) -> Option<&SubscriptionId> {
        match self {
            StoreEvent::Added { subscription }
            | StoreEvent::Updated { subscription }
            | StoreEvent::Removed { subscription } => Some(&subscription.id),
            StoreEvent::Snapshot { .. } | StoreEvent::Dropped { .. } => None,
        }
    }
}
