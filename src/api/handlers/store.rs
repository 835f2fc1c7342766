use crate::{
    api::extractors::extract_validated_json,
    auth::middleware::AuthUser,
    models::{CreateStoreRequest, Store, UpdateStoreRequest},
    types::{DataResponse, Result},
    AppState,
};
use axum::{extract::rejection::JsonRejection, extract::State, Json};

/// Create the caller's store
#[utoipa::path(
    post,
    path = "/api/v1/store",
    request_body = CreateStoreRequest,
    responses(
        (status = 200, description = "Store created", body = DataResponse<Store>),
        (status = 400, description = "Invalid input or store already exists"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "store",
    security(("raw_token" = []))
)]
pub async fn create_store(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    payload: std::result::Result<Json<CreateStoreRequest>, JsonRejection>,
) -> Result<Json<DataResponse<Store>>> {
    let req = extract_validated_json(payload)?;
    let store = state.stores.create(user.id, &req).await?;

    Ok(Json(DataResponse::with_message("store successfully created", store)))
}

/// Get the caller's store
#[utoipa::path(
    get,
    path = "/api/v1/store",
    responses(
        (status = 200, description = "The caller's store", body = DataResponse<Store>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Store not found")
    ),
    tag = "store",
    security(("raw_token" = []))
)]
pub async fn get_store(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<DataResponse<Store>>> {
    let store = state.stores.get_by_user(user.id).await?;
    Ok(Json(DataResponse::new(store)))
}

/// Replace the caller's store
#[utoipa::path(
    put,
    path = "/api/v1/store",
    request_body = UpdateStoreRequest,
    responses(
        (status = 200, description = "Store updated", body = DataResponse<Store>),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Store not found")
    ),
    tag = "store",
    security(("raw_token" = []))
)]
pub async fn update_store(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    payload: std::result::Result<Json<UpdateStoreRequest>, JsonRejection>,
) -> Result<Json<DataResponse<Store>>> {
    let req = extract_validated_json(payload)?;
    let store = state.stores.update(user.id, &req).await?;

    Ok(Json(DataResponse::with_message("store successfully updated", store)))
}
