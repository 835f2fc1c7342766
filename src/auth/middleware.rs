use crate::db::users;
use crate::models::User;
use crate::types::AppError;
use crate::AppState;
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header, request::Parts},
    middleware::Next,
    response::Response,
};

/// Authenticates a request from its raw `Authorization` header.
///
/// The header value is the token itself; no `Bearer ` prefix is stripped.
/// On success the caller's [`User`] is attached for the [`AuthUser`]
/// extractor. Any failure short-circuits with 401.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| AppError::Auth("missing authorization header".to_string()))?;

    let claims = state.tokens.verify_token(token)?;

    let conn = state.db.connection()?;
    let user = users::get_by_id(&conn, claims.user_id)
        .await?
        .ok_or_else(|| AppError::Auth(format!("user {} no longer exists", claims.user_id)))?;

    req.extensions_mut().insert(AuthUser(user));

    Ok(next.run(req).await)
}

/// The authenticated caller, as attached by [`auth_middleware`].
#[derive(Debug, Clone)]
pub struct AuthUser(pub User);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthUser>()
            .cloned()
            .ok_or_else(|| AppError::Auth("request was not authenticated".to_string()))
    }
}
