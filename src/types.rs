//! Core types for the subscription tracker.

use crate::error::{Result, StoreError};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unique identifier for a subscription.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SubscriptionId(pub String);

impl SubscriptionId {
    pub fn new(id: impl Into<String>) -> Self {
        SubscriptionId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SubscriptionId({})", self.0)
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fixed classification of a subscription's purpose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Entertainment,
    Work,
    Utilities,
    Other,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Category; 4] = [
        Category::Entertainment,
        Category::Work,
        Category::Utilities,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Entertainment => "Entertainment",
            Category::Work => "Work",
            Category::Utilities => "Utilities",
            Category::Other => "Other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim() {
            "Entertainment" => Ok(Category::Entertainment),
            "Work" => Ok(Category::Work),
            "Utilities" => Ok(Category::Utilities),
            "Other" => Ok(Category::Other),
            other => Err(StoreError::UnknownCategory(other.to_string())),
        }
    }
}

/// Which logo the view layer should render for a subscription.
///
/// The entity carries only this key; the renderer is looked up by the view
/// layer, keeping the record serializable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogoKey {
    Spotify,
    Netflix,
    Notion,
    Youtube,
    #[default]
    Generic,
}

/// A recurring-payment record tracked by the user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subscription {
    /// Unique identifier (assigned by the store, never reused).
    pub id: SubscriptionId,

    /// Display name.
    pub name: String,

    /// Logo key for the view layer.
    pub logo: LogoKey,

    /// Monthly cost. All costs are monthly-normalized; there is no cycle field.
    pub cost: Decimal,

    /// Next billing event.
    pub renewal_date: DateTime<Utc>,

    /// Purpose classification.
    pub category: Category,

    /// Display string for the payment method on file.
    pub payment_method: String,

    /// Whether the user wants to be notified before renewal.
    pub reminder_enabled: bool,
}

/// Input for creating a new subscription (before id and defaults are assigned).
#[derive(Clone, Debug)]
pub struct SubscriptionDraft {
    pub name: String,
    pub category: Category,
    pub renewal_date: DateTime<Utc>,
    pub cost: Decimal,
}

impl SubscriptionDraft {
    /// Create a draft from typed values.
    pub fn new(
        name: impl Into<String>,
        category: Category,
        renewal_date: DateTime<Utc>,
        cost: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            renewal_date,
            cost,
        }
    }

    /// Parse a draft from raw form fields.
    ///
    /// This is the add-form boundary: name must be non-empty, category one of
    /// the four fixed values, date in `%Y-%m-%d` form (what a date input
    /// produces), cost a non-negative decimal.
    pub fn from_form(name: &str, category: &str, renewal_date: &str, cost: &str) -> Result<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::EmptyName);
        }

        let category: Category = category.parse()?;

        let renewal_date = NaiveDate::parse_from_str(renewal_date.trim(), "%Y-%m-%d")
            .map_err(|_| StoreError::InvalidDate(renewal_date.to_string()))?
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| StoreError::InvalidDate(renewal_date.to_string()))?
            .and_utc();

        let cost: Decimal = cost
            .trim()
            .parse()
            .map_err(|_| StoreError::InvalidCost(cost.to_string()))?;

        let draft = Self {
            name: name.to_string(),
            category,
            renewal_date,
            cost,
        };
        draft.validate()?;
        Ok(draft)
    }

    /// Check the field invariants: non-empty name, non-negative cost.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(StoreError::EmptyName);
        }
        if self.cost.is_sign_negative() {
            return Err(StoreError::NegativeCost(self.cost));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_category_parse_roundtrip() {
        for category in Category::ALL {
            let parsed: Category = category.as_str().parse().unwrap();
            assert_eq!(parsed, category);
        }
    }

    #[test]
    fn test_category_parse_unknown() {
        let err = "Groceries".parse::<Category>().unwrap_err();
        assert!(matches!(err, StoreError::UnknownCategory(_)));
    }

    #[test]
    fn test_draft_from_form() {
        let draft =
            SubscriptionDraft::from_form("Netflix", "Entertainment", "2024-03-15", "15.49")
                .unwrap();

        assert_eq!(draft.name, "Netflix");
        assert_eq!(draft.category, Category::Entertainment);
        assert_eq!(draft.cost, Decimal::new(1549, 2));
        assert_eq!(
            draft.renewal_date,
            Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn test_draft_rejects_empty_name() {
        let err = SubscriptionDraft::from_form("   ", "Work", "2024-03-15", "10.00").unwrap_err();
        assert!(matches!(err, StoreError::EmptyName));
    }

    #[test]
    fn test_draft_rejects_malformed_date() {
        let err =
            SubscriptionDraft::from_form("Notion", "Work", "next tuesday", "10.00").unwrap_err();
        assert!(matches!(err, StoreError::InvalidDate(_)));
    }

    #[test]
    fn test_draft_rejects_malformed_cost() {
        let err = SubscriptionDraft::from_form("Notion", "Work", "2024-03-15", "ten").unwrap_err();
        assert!(matches!(err, StoreError::InvalidCost(_)));
    }

    #[test]
    fn test_draft_rejects_negative_cost() {
        let err =
            SubscriptionDraft::from_form("Notion", "Work", "2024-03-15", "-1.00").unwrap_err();
        assert!(matches!(err, StoreError::NegativeCost(_)));
    }

    #[test]
    fn test_subscription_serializes_without_renderer_state() {
        let sub = Subscription {
            id: SubscriptionId::new("1"),
            name: "Spotify".to_string(),
            logo: LogoKey::Spotify,
            cost: Decimal::new(1099, 2),
            renewal_date: Utc.with_ymd_and_hms(2024, 3, 15, 0, 0, 0).unwrap(),
            category: Category::Entertainment,
            payment_method: "Visa **** 1234".to_string(),
            reminder_enabled: true,
        };

        let json = serde_json::to_string(&sub).unwrap();
        let back: Subscription = serde_json::from_str(&json).unwrap();
        assert_eq!(back, sub);
        assert!(json.contains("\"spotify\""));
    }
}
