use crate::{
    api::extractors::{extract_validated_json, parse_id},
    auth::middleware::AuthUser,
    models::{CreateProductRequest, Product, UpdateProductRequest},
    types::{DataResponse, ListResponse, MessageResponse, Result},
    AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

/// Add a product to the caller's store
#[utoipa::path(
    post,
    path = "/api/v1/products",
    request_body = CreateProductRequest,
    responses(
        (status = 200, description = "Product created", body = DataResponse<Product>),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Store not found")
    ),
    tag = "products",
    security(("raw_token" = []))
)]
pub async fn create_product(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    payload: std::result::Result<Json<CreateProductRequest>, JsonRejection>,
) -> Result<Json<DataResponse<Product>>> {
    let req = extract_validated_json(payload)?;
    let product = state.products.create(user.id, &req).await?;

    Ok(Json(DataResponse::with_message("product successfully created", product)))
}

/// List the caller's active products
#[utoipa::path(
    get,
    path = "/api/v1/products",
    responses(
        (status = 200, description = "Active products", body = ListResponse<Product>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Store not found")
    ),
    tag = "products",
    security(("raw_token" = []))
)]
pub async fn list_products(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<ListResponse<Product>>> {
    let products = state.products.list(user.id).await?;
    Ok(Json(ListResponse::from(products)))
}

/// Get one of the caller's products
#[utoipa::path(
    get,
    path = "/api/v1/products/{id}",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "The product", body = DataResponse<Product>),
        (status = 400, description = "Invalid product id"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Product not found")
    ),
    tag = "products",
    security(("raw_token" = []))
)]
pub async fn get_product(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<Product>>> {
    let id = parse_id(&id, "product")?;
    let product = state.products.get(user.id, id).await?;

    Ok(Json(DataResponse::new(product)))
}

/// Replace one of the caller's products
#[utoipa::path(
    put,
    path = "/api/v1/products/{id}",
    params(("id" = i64, Path, description = "Product ID")),
    request_body = UpdateProductRequest,
    responses(
        (status = 200, description = "Product updated", body = DataResponse<Product>),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Product not found")
    ),
    tag = "products",
    security(("raw_token" = []))
)]
pub async fn update_product(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    payload: std::result::Result<Json<UpdateProductRequest>, JsonRejection>,
) -> Result<Json<DataResponse<Product>>> {
    let id = parse_id(&id, "product")?;
    let req = extract_validated_json(payload)?;
    let product = state.products.update(user.id, id, &req).await?;

    Ok(Json(DataResponse::with_message("product successfully updated", product)))
}

/// Delete one of the caller's products
#[utoipa::path(
    delete,
    path = "/api/v1/products/{id}",
    params(("id" = i64, Path, description = "Product ID")),
    responses(
        (status = 200, description = "Product deleted", body = MessageResponse),
        (status = 400, description = "Invalid product id"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Product not found")
    ),
    tag = "products",
    security(("raw_token" = []))
)]
pub async fn delete_product(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let id = parse_id(&id, "product")?;
    state.products.delete(user.id, id).await?;

    Ok(Json(MessageResponse::new("product successfully deleted")))
}
