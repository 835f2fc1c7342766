use crate::{
    api::extractors::extract_validated_json,
    types::{MessageResponse, Result, SignInRequest, SignUpRequest, TokenResponse},
    AppState,
};
use axum::{extract::rejection::JsonRejection, extract::State, Json};

/// Register a new user
#[utoipa::path(
    post,
    path = "/api/v1/auth/signup",
    request_body = SignUpRequest,
    responses(
        (status = 200, description = "User registered successfully", body = MessageResponse),
        (status = 400, description = "Invalid input or email already registered")
    ),
    tag = "auth"
)]
pub async fn signup(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SignUpRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>> {
    let req = extract_validated_json(payload)?;
    state.auth.sign_up(&req).await?;

    Ok(Json(MessageResponse::new("user successfully registered")))
}

/// Sign in with email and password
#[utoipa::path(
    post,
    path = "/api/v1/auth/signin",
    request_body = SignInRequest,
    responses(
        (status = 200, description = "Signed in", body = TokenResponse),
        (status = 400, description = "Invalid credentials")
    ),
    tag = "auth"
)]
pub async fn signin(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SignInRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>> {
    let req = extract_validated_json(payload)?;
    let access_token = state.auth.sign_in(&req).await?;

    Ok(Json(TokenResponse { access_token }))
}
