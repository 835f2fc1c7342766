use crate::api::handlers::{auth, catalog, orders, products, store, tasks, website};
use crate::auth::middleware::auth_middleware;
use crate::AppState;
use axum::{
    middleware,
    routing::{get, post},
    Router,
};

/// Method and path of every route, for startup logging and `umkm-server routes`.
pub const ROUTE_TABLE: &[(&str, &str, bool)] = &[
    ("GET", "/health", false),
    ("GET", "/catalog/{domain}", false),
    ("POST", "/api/v1/auth/signup", false),
    ("POST", "/api/v1/auth/signin", false),
    ("POST", "/api/v1/orders/{store_id}", false),
    ("POST", "/api/v1/store", true),
    ("GET", "/api/v1/store", true),
    ("PUT", "/api/v1/store", true),
    ("POST", "/api/v1/products", true),
    ("GET", "/api/v1/products", true),
    ("GET", "/api/v1/products/{id}", true),
    ("PUT", "/api/v1/products/{id}", true),
    ("DELETE", "/api/v1/products/{id}", true),
    ("POST", "/api/v1/website", true),
    ("GET", "/api/v1/website", true),
    ("PUT", "/api/v1/website", true),
    ("GET", "/api/v1/website/qr", true),
    ("GET", "/api/v1/orders", true),
    ("POST", "/api/v1/todos", true),
    ("GET", "/api/v1/todos", true),
    ("GET", "/api/v1/todos/{id}", true),
    ("PUT", "/api/v1/todos/{id}", true),
    ("DELETE", "/api/v1/todos/{id}", true),
];

/// Routes nested under `/api/v1`.
pub fn create_router(state: AppState) -> Router<AppState> {
    let public_routes = Router::new()
        // Public routes (no auth required)
        .route("/auth/signup", post(auth::signup))
        .route("/auth/signin", post(auth::signin))
        .route("/orders/{store_id}", post(orders::create_order));

    let protected_routes = Router::new()
        .route(
            "/store",
            post(store::create_store)
                .get(store::get_store)
                .put(store::update_store),
        )
        .route(
            "/products",
            post(products::create_product).get(products::list_products),
        )
        .route(
            "/products/{id}",
            get(products::get_product)
                .put(products::update_product)
                .delete(products::delete_product),
        )
        .route(
            "/website",
            post(website::create_website)
                .get(website::get_website)
                .put(website::update_website),
        )
        .route("/website/qr", get(website::website_qr))
        .route("/orders", get(orders::list_orders))
        .route("/todos", post(tasks::create_task).get(tasks::list_tasks))
        .route(
            "/todos/{id}",
            get(tasks::get_task)
                .put(tasks::update_task)
                .delete(tasks::delete_task),
        )
        .layer(middleware::from_fn_with_state(state, auth_middleware));

    public_routes.merge(protected_routes)
}

/// Unauthenticated routes served outside the API prefix.
pub fn public_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(|| async { "OK" }))
        .route("/catalog/{domain}", get(catalog::get_catalog))
}
