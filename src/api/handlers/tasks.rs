use crate::{
    api::extractors::{extract_validated_json, parse_id},
    auth::middleware::AuthUser,
    models::{CreateTaskRequest, Task, UpdateTaskRequest},
    types::{MessageResponse, Result},
    AppState,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};

/// Create a todo
#[utoipa::path(
    post,
    path = "/api/v1/todos",
    request_body = CreateTaskRequest,
    responses(
        (status = 200, description = "Todo created", body = Task),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "todos",
    security(("raw_token" = []))
)]
pub async fn create_task(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    payload: std::result::Result<Json<CreateTaskRequest>, JsonRejection>,
) -> Result<Json<Task>> {
    let req = extract_validated_json(payload)?;
    Ok(Json(state.tasks.create(user.id, &req).await?))
}

/// List the caller's todos
#[utoipa::path(
    get,
    path = "/api/v1/todos",
    responses(
        (status = 200, description = "Todos", body = Vec<Task>),
        (status = 401, description = "Unauthorized")
    ),
    tag = "todos",
    security(("raw_token" = []))
)]
pub async fn list_tasks(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<Vec<Task>>> {
    Ok(Json(state.tasks.list(user.id).await?))
}

/// Get a todo
#[utoipa::path(
    get,
    path = "/api/v1/todos/{id}",
    params(("id" = i64, Path, description = "Todo ID")),
    responses(
        (status = 200, description = "The todo", body = Task),
        (status = 400, description = "Invalid todo id"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Todo not found")
    ),
    tag = "todos",
    security(("raw_token" = []))
)]
pub async fn get_task(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<Task>> {
    let id = parse_id(&id, "todo")?;
    Ok(Json(state.tasks.get(user.id, id).await?))
}

/// Replace a todo
#[utoipa::path(
    put,
    path = "/api/v1/todos/{id}",
    params(("id" = i64, Path, description = "Todo ID")),
    request_body = UpdateTaskRequest,
    responses(
        (status = 200, description = "Todo updated", body = Task),
        (status = 400, description = "Invalid input"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Todo not found")
    ),
    tag = "todos",
    security(("raw_token" = []))
)]
pub async fn update_task(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
    payload: std::result::Result<Json<UpdateTaskRequest>, JsonRejection>,
) -> Result<Json<Task>> {
    let id = parse_id(&id, "todo")?;
    let req = extract_validated_json(payload)?;
    Ok(Json(state.tasks.update(user.id, id, &req).await?))
}

/// Delete a todo
#[utoipa::path(
    delete,
    path = "/api/v1/todos/{id}",
    params(("id" = i64, Path, description = "Todo ID")),
    responses(
        (status = 200, description = "Todo deleted", body = MessageResponse),
        (status = 400, description = "Invalid todo id"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Todo not found")
    ),
    tag = "todos",
    security(("raw_token" = []))
)]
pub async fn delete_task(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    let id = parse_id(&id, "todo")?;
    state.tasks.delete(user.id, id).await?;

    Ok(Json(MessageResponse::new("todo successfully deleted")))
}
