//! Domain entities and their request payloads.
//!
//! Every entity is owned, directly or through its store, by a user:
//!
//! ```text
//! User ─┬─ Store ─┬─ Product
//!       │         ├─ Website
//!       │         └─ Order
//!       └─ Task (legacy)
//! ```
//!
//! Request payloads implement [`Validate`] so handlers can reject malformed
//! input before any service runs.

pub mod order;
pub mod product;
pub mod store;
pub mod task;
pub mod user;
pub mod website;

pub use order::{CreateOrderRequest, Order, OrderItem, ORDER_STATUS_PENDING};
pub use product::{CreateProductRequest, Product, UpdateProductRequest};
pub use store::{CreateStoreRequest, Store, UpdateStoreRequest};
pub use task::{CreateTaskRequest, Task, UpdateTaskRequest};
pub use user::User;
pub use website::{CreateWebsiteRequest, UpdateWebsiteRequest, Website};

use chrono::{DateTime, Utc};

/// Business-rule validation for request payloads, run after deserialization.
pub trait Validate {
    /// Returns a caller-facing message describing the first violated rule.
    fn validate(&self) -> Result<(), String>;
}

pub(crate) fn require(field: &str, value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{} is required", field));
    }
    Ok(())
}

pub(crate) fn require_non_negative(field: &str, value: f64) -> Result<(), String> {
    if !value.is_finite() || value < 0.0 {
        return Err(format!("{} must be a non-negative number", field));
    }
    Ok(())
}

/// Converts a stored unix timestamp back into a UTC datetime.
pub(crate) fn timestamp(secs: i64) -> crate::types::Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or_else(|| {
        crate::types::AppError::Database(format!("invalid stored timestamp: {}", secs))
    })
}
