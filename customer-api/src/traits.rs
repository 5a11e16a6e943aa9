//! Service trait definitions for dependency injection
//!
//! All I/O operations are abstracted through these traits for testability

use async_trait::async_trait;
use shared::Customer;

use crate::error::ApiResult;

/// Durable storage for the customer collection.
///
/// Every save replaces the whole persisted collection; there are no partial
/// updates.
#[mockall::automock]
#[async_trait]
pub trait CustomerPersistence: Send + Sync {
    /// Read the collection persisted by the last successful save
    async fn load(&self) -> ApiResult<Vec<Customer>>;

    /// Overwrite the persisted collection with `customers`
    async fn save(&self, customers: &[Customer]) -> ApiResult<()>;

    /// Human readable location used in log lines
    fn location(&self) -> String;
}
