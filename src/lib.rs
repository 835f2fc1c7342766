//! # UMKM Server
//!
//! Multi-tenant commerce backend for small businesses. Each user owns one
//! store; a store owns its products, one website and the orders customers
//! place. A published website exposes a public catalog, and every order comes
//! back with a WhatsApp link that carries the order summary to the seller.
//!
//! ## Overview
//!
//! The crate can be used in two ways:
//!
//! 1. **As a standalone server** - Run the `umkm-server` binary
//! 2. **As a library** - Mount [`build_app`] in your own Axum application
//!
//! ```rust,ignore
//! use umkm::{build_app, AppConfig, AppState, DatabaseProvider};
//!
//! let config = AppConfig::load("umkm.toml")?;
//! let db = DatabaseProvider::from_config(&config.database).create_client().await?;
//! let state = AppState::new(config, db, std::env::var("JWT_SECRET")?);
//! let app = build_app(state);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `local-db` | Local SQLite database (default) |
//! | `turso` | Remote Turso database |
//! | `swagger-ui` | Interactive API docs at `/swagger-ui/` |
//!
//! ## Modules
//!
//! - [`api`] - REST API handlers and routes
//! - [`auth`] - Tokens, password hashing and the auth middleware
//! - [`db`] - libsql client and per-entity repositories
//! - [`models`] - Entities and request payloads
//! - [`services`] - Ownership rules and business logic
//! - [`types`] - Response envelopes and error handling

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(rustdoc::missing_crate_level_docs)]

/// HTTP API handlers and routes.
pub mod api;
/// Tokens, password hashing and middleware.
pub mod auth;
/// Command-line interface.
pub mod cli;
/// Database client and repositories.
pub mod db;
/// Domain entities.
pub mod models;
/// Catalog QR codes.
pub mod qr;
/// Domain services.
pub mod services;
/// Core types (requests, responses, errors).
pub mod types;
/// Configuration utilities.
pub mod utils;

// Re-export commonly used types
pub use db::{DatabaseProvider, TursoClient};
pub use types::{AppError, Result};
pub use utils::toml_config::{AppConfig, ConfigError, OrderPricing};

use crate::auth::jwt::TokenService;
use crate::qr::QrService;
use crate::services::{
    AuthService, OrderService, ProductService, StoreService, TaskService, WebsiteService,
};
use axum::{extract::DefaultBodyLimit, http::Method, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Largest accepted request body.
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    /// Infrastructure configuration loaded at startup
    pub config: Arc<AppConfig>,
    /// Database client
    pub db: Arc<TursoClient>,
    /// Access token issuer and verifier
    pub tokens: Arc<TokenService>,
    pub auth: AuthService,
    pub stores: StoreService,
    pub products: ProductService,
    pub websites: WebsiteService,
    pub orders: OrderService,
    pub tasks: TaskService,
    pub qr: QrService,
}

impl AppState {
    pub fn new(config: AppConfig, db: TursoClient, jwt_secret: String) -> Self {
        let db = Arc::new(db);
        let tokens = Arc::new(TokenService::new(jwt_secret, config.auth.issuer.clone()));
        let pricing = config.orders.pricing;

        Self {
            auth: AuthService::new(db.clone(), tokens.clone()),
            stores: StoreService::new(db.clone()),
            products: ProductService::new(db.clone()),
            websites: WebsiteService::new(db.clone()),
            orders: OrderService::new(db.clone(), pricing),
            tasks: TaskService::new(db.clone()),
            qr: QrService::new(),
            config: Arc::new(config),
            db,
            tokens,
        }
    }
}

/// Full application router: `/api/v1`, the public catalog, tracing and CORS.
pub fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any);

    let router = Router::new()
        .nest("/api/v1", api::routes::create_router(state.clone()))
        .merge(api::routes::public_router());

    #[cfg(feature = "swagger-ui")]
    let router = {
        use utoipa::OpenApi;
        router.merge(
            utoipa_swagger_ui::SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", api::ApiDoc::openapi()),
        )
    };

    router
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}
