use crate::{
    api::extractors::{extract_validated_json, parse_id},
    auth::middleware::AuthUser,
    models::{CreateOrderRequest, Order},
    types::{ListResponse, OrderCreatedResponse, Result},
    AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

const ORDER_INSTRUCTIONS: &str = "Click the WhatsApp URL to send your order directly to the store";

/// Place an order with a store (public)
#[utoipa::path(
    post,
    path = "/api/v1/orders/{store_id}",
    params(("store_id" = i64, Path, description = "Store ID")),
    request_body = CreateOrderRequest,
    responses(
        (status = 200, description = "Order placed", body = OrderCreatedResponse),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Store not found")
    ),
    tag = "orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    Path(store_id): Path<String>,
    payload: std::result::Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<Json<OrderCreatedResponse>> {
    let store_id = parse_id(&store_id, "store")?;
    let req = extract_validated_json(payload)?;
    let placed = state.orders.create(store_id, &req).await?;

    Ok(Json(OrderCreatedResponse {
        message: "order successfully created".to_string(),
        order: placed.order,
        whatsapp_url: placed.whatsapp_url,
        instructions: ORDER_INSTRUCTIONS.to_string(),
    }))
}

/// List every order of the caller's store
#[utoipa::path(
    get,
    path = "/api/v1/orders",
    responses(
        (status = 200, description = "Orders", body = ListResponse<Order>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Store not found")
    ),
    tag = "orders",
    security(("raw_token" = []))
)]
pub async fn list_orders(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<ListResponse<Order>>> {
    let orders = state.orders.list(user.id).await?;
    Ok(Json(ListResponse::from(orders)))
}
