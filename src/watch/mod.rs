//! Watch system for live collection updates.
//!
//! This module provides in-process change feeds over the store:
//! - An initial snapshot of the collection at registration time
//! - Added / updated / removed events as mutations happen
//!
//! Watches support:
//! - Filtering by event kind and category
//! - Bounded buffers with slow-watcher dropping
//!
//! # Example
//!
//! ```ignore
//! let handle = store.watch(WatchConfig {
//!     filter: WatchFilter::categories(vec![Category::Entertainment]),
//!     ..Default::default()
//! });
//!
//! loop {
//!     match handle.recv() {
//!         Ok(StoreEvent::Snapshot { subscriptions }) => render(subscriptions),
//!         Ok(StoreEvent::Added { subscription }) => println!("new: {}", subscription.name),
//!         Ok(StoreEvent::Dropped { .. }) | Err(_) => break,
//!         Ok(_) => {}
//!     }
//! }
//! ```

mod manager;
mod types;

pub use manager::WatchManager;
pub use types::{DropReason, StoreEvent, WatchConfig, WatchFilter, WatchHandle, WatchId};
