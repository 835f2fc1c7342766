//! API request handlers, one module per resource.

/// Sign-up and sign-in.
pub mod auth;
/// Public catalog by domain.
pub mod catalog;
/// Order placement and the owner's order list.
pub mod orders;
/// Product CRUD for the caller's store.
pub mod products;
/// The caller's store.
pub mod store;
/// Legacy to-do list.
pub mod tasks;
/// The caller's website and its QR code.
pub mod website;
