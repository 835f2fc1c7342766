//! Authentication.
//!
//! - [`jwt`] - HS256 access tokens embedding the user id, valid for 24 hours
//! - [`password`] - Argon2id password hashing
//! - [`middleware`] - the layer guarding owner routes and the [`AuthUser`](middleware::AuthUser) extractor
//!
//! Protected routes expect the token as the raw `Authorization` header value:
//!
//! ```text
//! Authorization: eyJhbGciOiJIUzI1NiJ9...
//! ```

pub mod jwt;
pub mod middleware;
pub mod password;
