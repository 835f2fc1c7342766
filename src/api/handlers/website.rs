use crate::{
    api::extractors::extract_validated_json,
    auth::middleware::AuthUser,
    models::{CreateWebsiteRequest, UpdateWebsiteRequest, Website},
    qr::QrService,
    services::WebsiteError,
    types::{AppError, DataResponse, Result},
    AppState,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Json,
};

/// Create the caller's website (unpublished)
#[utoipa::path(
    post,
    path = "/api/v1/website",
    request_body = CreateWebsiteRequest,
    responses(
        (status = 200, description = "Website created", body = DataResponse<Website>),
        (status = 400, description = "Invalid input or website already exists"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Store not found")
    ),
    tag = "website",
    security(("raw_token" = []))
)]
pub async fn create_website(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    payload: std::result::Result<Json<CreateWebsiteRequest>, JsonRejection>,
) -> Result<Json<DataResponse<Website>>> {
    let req = extract_validated_json(payload)?;
    let website = state.websites.create(user.id, &req).await?;

    Ok(Json(DataResponse::with_message("website successfully created", website)))
}

/// Get the caller's website
#[utoipa::path(
    get,
    path = "/api/v1/website",
    responses(
        (status = 200, description = "The caller's website", body = DataResponse<Website>),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Store or website not found")
    ),
    tag = "website",
    security(("raw_token" = []))
)]
pub async fn get_website(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> Result<Json<DataResponse<Website>>> {
    let website = state.websites.get(user.id).await?;
    Ok(Json(DataResponse::new(website)))
}

/// Replace the caller's website, including its published flag
#[utoipa::path(
    put,
    path = "/api/v1/website",
    request_body = UpdateWebsiteRequest,
    responses(
        (status = 200, description = "Website updated", body = DataResponse<Website>),
        (status = 400, description = "Invalid input or domain taken"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Store or website not found")
    ),
    tag = "website",
    security(("raw_token" = []))
)]
pub async fn update_website(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    payload: std::result::Result<Json<UpdateWebsiteRequest>, JsonRejection>,
) -> Result<Json<DataResponse<Website>>> {
    let req = extract_validated_json(payload)?;
    let website = state.websites.update(user.id, &req).await?;

    Ok(Json(DataResponse::with_message("website successfully updated", website)))
}

/// Download a QR code pointing at the caller's public catalog
#[utoipa::path(
    get,
    path = "/api/v1/website/qr",
    responses(
        (status = 200, description = "PNG image", content_type = "image/png"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Website not found")
    ),
    tag = "website",
    security(("raw_token" = []))
)]
pub async fn website_qr(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    headers: HeaderMap,
) -> Result<Response> {
    let website = match state.websites.get(user.id).await {
        Ok(website) => website,
        Err(WebsiteError::NotFound) | Err(WebsiteError::StoreNotFound) => {
            return Err(AppError::NotFound(
                "website not found, please create website first".to_string(),
            ))
        }
        Err(e) => return Err(e.into()),
    };

    let base_url = public_base_url(&state, &headers);
    let url = QrService::catalog_url(&base_url, &website.domain);
    let png = state.qr.render_png(&url)?;

    let disposition = format!(
        "attachment; filename=\"{}\"",
        QrService::file_name(&website.domain)
    );

    Ok((
        [
            (header::CONTENT_TYPE, "image/png".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        png,
    )
        .into_response())
}

/// Configured base URL, else the request's Host, else the bind address.
fn public_base_url(state: &AppState, headers: &HeaderMap) -> String {
    if let Some(base) = &state.config.server.public_base_url {
        return base.clone();
    }

    match headers.get(header::HOST).and_then(|h| h.to_str().ok()) {
        Some(host) if !host.is_empty() => format!("http://{}", host),
        _ => format!("http://{}", state.config.server.bind_address()),
    }
}
