//! HTTP API Handlers and Routes
//!
//! REST layer built on Axum.
//!
//! # Module Structure
//!
//! - [`api::handlers`](crate::api::handlers) - Request handlers for each endpoint
//! - [`api::routes`](crate::api::routes) - Route definitions and router configuration
//! - [`api::extractors`](crate::api::extractors) - JSON body validation and path id parsing
//!
//! # API Endpoints
//!
//! ## Authentication (`/api/v1/auth`)
//! - `POST /api/v1/auth/signup` - Register a new user
//! - `POST /api/v1/auth/signin` - Sign in and receive an access token
//!
//! ## Store (`/api/v1/store`)
//! - `POST`, `GET`, `PUT /api/v1/store` - The caller's single store
//!
//! ## Products (`/api/v1/products`)
//! - `POST /api/v1/products`, `GET /api/v1/products`
//! - `GET`, `PUT`, `DELETE /api/v1/products/{id}`
//!
//! ## Website (`/api/v1/website`)
//! - `POST`, `GET`, `PUT /api/v1/website`
//! - `GET /api/v1/website/qr` - PNG QR code of the public catalog URL
//!
//! ## Orders
//! - `POST /api/v1/orders/{store_id}` - Public; returns the order and a WhatsApp link
//! - `GET /api/v1/orders` - The caller's store orders
//!
//! ## Todos (`/api/v1/todos`)
//! - Owner-scoped CRUD
//!
//! ## Public
//! - `GET /catalog/{domain}` - Published store catalog
//! - `GET /health` - Liveness probe
//!
//! # Authentication
//!
//! Protected endpoints take the token as the whole `Authorization` header value:
//! ```text
//! Authorization: <token>
//! ```
//!
//! # OpenAPI Documentation
//!
//! [`ApiDoc`] describes every endpoint. When the `swagger-ui` feature is
//! enabled, interactive documentation is served at `/swagger-ui/`.

/// Body and path helpers.
pub mod extractors;
/// Request and response handlers for all API endpoints.
pub mod handlers;
/// Router configuration and route definitions.
pub mod routes;

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::signup,
        handlers::auth::signin,
        handlers::store::create_store,
        handlers::store::get_store,
        handlers::store::update_store,
        handlers::products::create_product,
        handlers::products::list_products,
        handlers::products::get_product,
        handlers::products::update_product,
        handlers::products::delete_product,
        handlers::website::create_website,
        handlers::website::get_website,
        handlers::website::update_website,
        handlers::website::website_qr,
        handlers::catalog::get_catalog,
        handlers::orders::create_order,
        handlers::orders::list_orders,
        handlers::tasks::create_task,
        handlers::tasks::list_tasks,
        handlers::tasks::get_task,
        handlers::tasks::update_task,
        handlers::tasks::delete_task,
    ),
    components(schemas(
        crate::types::SignUpRequest,
        crate::types::SignInRequest,
        crate::types::TokenResponse,
        crate::types::MessageResponse,
        crate::types::CatalogResponse,
        crate::types::OrderCreatedResponse,
        crate::models::Store,
        crate::models::CreateStoreRequest,
        crate::models::UpdateStoreRequest,
        crate::models::Product,
        crate::models::CreateProductRequest,
        crate::models::UpdateProductRequest,
        crate::models::Website,
        crate::models::CreateWebsiteRequest,
        crate::models::UpdateWebsiteRequest,
        crate::models::Order,
        crate::models::OrderItem,
        crate::models::CreateOrderRequest,
        crate::models::Task,
        crate::models::CreateTaskRequest,
        crate::models::UpdateTaskRequest,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Accounts and tokens"),
        (name = "store", description = "The caller's store"),
        (name = "products", description = "Store products"),
        (name = "website", description = "Storefront and QR code"),
        (name = "catalog", description = "Public catalog"),
        (name = "orders", description = "Orders and WhatsApp links"),
        (name = "todos", description = "Legacy to-do list"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "raw_token",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("Authorization"))),
            );
        }
    }
}
