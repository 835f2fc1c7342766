//! Domain services.
//!
//! Each service owns the rules for one entity: ownership checks (everything
//! is resolved through the caller's store), business invariants and
//! transaction boundaries. Services report failures through their own closed
//! error enum; the `From<…> for AppError` impls are the single place those
//! map onto HTTP statuses.

pub mod auth;
pub mod order;
pub mod product;
pub mod store;
pub mod task;
pub mod website;

pub use auth::{AuthError, AuthService};
pub use order::{OrderError, OrderService, PlacedOrder};
pub use product::{ProductError, ProductService};
pub use store::{StoreError, StoreService};
pub use task::{TaskError, TaskService};
pub use website::{Catalog, WebsiteError, WebsiteService};
