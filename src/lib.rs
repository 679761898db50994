//! # SubSentry Core
//!
//! In-memory subscription tracking: one mutable store owns the collection,
//! pure view functions derive the dashboard projections, and watchers receive
//! change events over bounded channels.
//!
//! ## Core Concepts
//!
//! - **Store**: the only mutation surface — add, update, delete, list
//! - **Views**: pure projections over `(subscriptions, as_of)` — spend
//!   totals, category breakdown, renewal windowing
//! - **Watches**: in-process change feeds with filtering and
//!   slow-consumer dropping
//! - **Session**: ephemeral login/navigation/modal/theme state
//!
//! ## Example
//!
//! ```ignore
//! use subsentry::{Store, SubscriptionDraft, views};
//! use chrono::Utc;
//!
//! let now = Utc::now();
//! let store = Store::with_demo_data(now);
//!
//! let draft = SubscriptionDraft::from_form("Figma", "Work", "2026-09-01", "12.00")?;
//! store.add(draft)?;
//!
//! let summary = views::dashboard_summary(&store.list(), now);
//! println!("{} active, ${} / month", summary.active_subscriptions, summary.total_monthly_spend);
//! ```

pub mod demo;
pub mod error;
pub mod session;
pub mod store;
pub mod types;
pub mod views;
pub mod watch;

// Re-exports
pub use demo::{demo_subscriptions, DEMO_PAYMENT_METHOD};
pub use error::{Result, StoreError};
pub use session::{Modal, Session, Theme, View};
pub use store::{Store, DEFAULT_PAYMENT_METHOD};
pub use types::{Category, LogoKey, Subscription, SubscriptionDraft, SubscriptionId};
pub use views::{
    dashboard_summary, days_until, spend_by_category, total_monthly_spend, upcoming_renewals,
    CategorySpend, DashboardSummary, UpcomingRenewal, RENEWAL_WINDOW_DAYS,
};
pub use watch::{
    DropReason, StoreEvent, WatchConfig, WatchFilter, WatchHandle, WatchId, WatchManager,
};
