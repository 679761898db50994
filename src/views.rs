//! Derived read-only views over the subscription collection.
//!
//! Everything here is a pure function of `(subscriptions, as_of)`: nothing
//! mutates, and the reference instant is always an explicit parameter rather
//! than an ambient clock read, so callers and tests control time.

use crate::types::{Category, Subscription};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Default renewal window for "upcoming" lists, in days.
pub const RENEWAL_WINDOW_DAYS: i64 = 30;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Whole days until a renewal, rounding any positive sub-day remainder up.
///
/// A renewal later today therefore counts as 1 day out, and a renewal at
/// exactly `as_of` is 0 ("renews today"). Past renewals are negative.
pub fn days_until(renewal_date: DateTime<Utc>, as_of: DateTime<Utc>) -> i64 {
    let millis = renewal_date
        .signed_duration_since(as_of)
        .num_milliseconds();
    millis.div_euclid(MILLIS_PER_DAY) + i64::from(millis.rem_euclid(MILLIS_PER_DAY) != 0)
}

/// A subscription renewing inside the window, with its distance in days.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UpcomingRenewal {
    pub subscription: Subscription,
    pub days_until: i64,
}

impl UpcomingRenewal {
    /// Display label for the renewal distance.
    pub fn label(&self) -> String {
        match self.days_until {
            0 => "Renews today".to_string(),
            1 => "Renews in 1 day".to_string(),
            n => format!("Renews in {} days", n),
        }
    }
}

/// Subscriptions renewing within `[as_of, as_of + window_days]`, both ends
/// inclusive, ordered by ascending renewal date.
pub fn upcoming_renewals(
    subscriptions: &[Subscription],
    as_of: DateTime<Utc>,
    window_days: i64,
) -> Vec<UpcomingRenewal> {
    let mut upcoming: Vec<UpcomingRenewal> = subscriptions
        .iter()
        .filter_map(|subscription| {
            let days = days_until(subscription.renewal_date, as_of);
            (days >= 0 && days <= window_days).then(|| UpcomingRenewal {
                subscription: subscription.clone(),
                days_until: days,
            })
        })
        .collect();

    // Stable sort: entries on the same date keep insertion order.
    upcoming.sort_by_key(|entry| entry.subscription.renewal_date);
    upcoming
}

/// Sum of monthly costs over the whole collection.
pub fn total_monthly_spend(subscriptions: &[Subscription]) -> Decimal {
    subscriptions
        .iter()
        .fold(Decimal::ZERO, |total, subscription| {
            total + subscription.cost
        })
}

/// Spend total for one category.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CategorySpend {
    pub category: Category,
    pub total: Decimal,
}

/// Per-category spend totals in fixed category order.
///
/// Categories with a zero total are omitted rather than reported as zero.
pub fn spend_by_category(subscriptions: &[Subscription]) -> Vec<CategorySpend> {
    Category::ALL
        .iter()
        .filter_map(|&category| {
            let total = subscriptions
                .iter()
                .filter(|s| s.category == category)
                .fold(Decimal::ZERO, |total, s| total + s.cost);
            (!total.is_zero()).then_some(CategorySpend { category, total })
        })
        .collect()
}

/// The dashboard's three summary figures.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DashboardSummary {
    /// Number of live subscriptions.
    pub active_subscriptions: usize,
    /// Renewals inside the default window.
    pub upcoming_renewals: usize,
    /// Sum of all monthly costs.
    pub total_monthly_spend: Decimal,
}

/// Compute the dashboard summary cards for the collection.
pub fn dashboard_summary(subscriptions: &[Subscription], as_of: DateTime<Utc>) -> DashboardSummary {
    DashboardSummary {
        active_subscriptions: subscriptions.len(),
        upcoming_renewals: upcoming_renewals(subscriptions, as_of, RENEWAL_WINDOW_DAYS).len(),
        total_monthly_spend: total_monthly_spend(subscriptions),
    }
}
