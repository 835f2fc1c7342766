//! Relational persistence.
//!
//! [`TursoClient`] owns the libsql database (local file, in-memory, or remote
//! Turso) and its schema. Each entity has a repository module of free
//! functions taking a `&libsql::Connection`; a `libsql::Transaction`
//! dereferences to a connection, so services run the same queries inside a
//! transaction opened with [`TursoClient::begin`] and closed with [`finish`].

#![allow(missing_docs)]

pub mod orders;
pub mod products;
pub mod provider;
pub mod stores;
pub mod tasks;
pub mod turso;
pub mod users;
pub mod websites;

pub use provider::DatabaseProvider;
pub use turso::{finish, TursoClient};
