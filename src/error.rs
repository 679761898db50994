//! Error types for the subscription store.

use crate::types::SubscriptionId;
use rust_decimal::Decimal;
use thiserror::Error;

/// Main error type for store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Subscription not found: {0}")]
    SubscriptionNotFound(SubscriptionId),

    #[error("Subscription name must not be empty")]
    EmptyName,

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Invalid renewal date: {0}")]
    InvalidDate(String),

    #[error("Invalid cost: {0}")]
    InvalidCost(String),

    #[error("Cost must not be negative: {0}")]
    NegativeCost(Decimal),
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
