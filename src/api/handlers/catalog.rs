use crate::{
    services::WebsiteError,
    types::{AppError, CatalogResponse},
    AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

/// Public catalog of a published website
#[utoipa::path(
    get,
    path = "/catalog/{domain}",
    params(("domain" = String, Path, description = "Website domain, matched exactly")),
    responses(
        (status = 200, description = "Store and active products", body = CatalogResponse),
        (status = 404, description = "No published website for this domain")
    ),
    tag = "catalog"
)]
pub async fn get_catalog(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> std::result::Result<Json<CatalogResponse>, Response> {
    match state.websites.catalog(&domain).await {
        Ok(catalog) => {
            let count = catalog.products.len();
            Ok(Json(CatalogResponse {
                store: catalog.store,
                products: catalog.products,
                count,
            }))
        }
        Err(WebsiteError::CatalogNotFound) => Err((
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({
                "error": "catalog not found",
                "message": "The requested store catalog does not exist or is not published",
            })),
        )
            .into_response()),
        Err(e) => Err(AppError::from(e).into_response()),
    }
}
