//! Built-in demo catalog used to seed a fresh store.

use crate::types::{Category, LogoKey, Subscription, SubscriptionId};
use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

/// Payment method stamped on the seeded entries.
pub const DEMO_PAYMENT_METHOD: &str = "Visa **** 1234";

/// The fixed demo list, with renewal dates laid out relative to `as_of`.
pub fn demo_subscriptions(as_of: DateTime<Utc>) -> Vec<Subscription> {
    let entry = |id: &str,
                 name: &str,
                 logo: LogoKey,
                 cost_cents: i64,
                 days_out: i64,
                 category: Category,
                 reminder_enabled: bool| Subscription {
        id: SubscriptionId::new(id),
        name: name.to_string(),
        logo,
        cost: Decimal::new(cost_cents, 2),
        renewal_date: as_of + Duration::days(days_out),
        category,
        payment_method: DEMO_PAYMENT_METHOD.to_string(),
        reminder_enabled,
    };

    vec![
        entry("1", "Spotify", LogoKey::Spotify, 10_99, 5, Category::Entertainment, true),
        entry("2", "Netflix", LogoKey::Netflix, 15_49, 12, Category::Entertainment, true),
        entry("3", "Notion", LogoKey::Notion, 10_00, 21, Category::Work, true),
        entry(
            "4",
            "YouTube Premium",
            LogoKey::Youtube,
            13_99,
            30,
            Category::Entertainment,
            false,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_demo_catalog_shape() {
        let as_of = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        let subs = demo_subscriptions(as_of);

        assert_eq!(subs.len(), 4);
        assert!(subs.iter().all(|s| s.payment_method == DEMO_PAYMENT_METHOD));

        // Ids are unique
        let mut ids: Vec<&str> = subs.iter().map(|s| s.id.as_str()).collect();
        ids.dedup();
        assert_eq!(ids.len(), 4);

        // Only YouTube Premium ships with reminders off
        let off: Vec<&str> = subs
            .iter()
            .filter(|s| !s.reminder_enabled)
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(off, vec!["YouTube Premium"]);
    }
}
