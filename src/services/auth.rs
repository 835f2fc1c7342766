use crate::auth::jwt::TokenService;
use crate::auth::password::{hash_password, verify_password};
use crate::db::{users, TursoClient};
use crate::models::User;
use crate::types::{AppError, SignInRequest, SignUpRequest};
use std::sync::Arc;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("email already registered")]
    AlreadyRegistered,

    #[error("invalid email or password")]
    InvalidCredentials,

    #[error(transparent)]
    Internal(#[from] AppError),
}

impl From<AuthError> for AppError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AlreadyRegistered | AuthError::InvalidCredentials => {
                AppError::InvalidInput(err.to_string())
            }
            AuthError::Internal(inner) => inner,
        }
    }
}

/// Account registration and sign-in.
#[derive(Clone)]
pub struct AuthService {
    db: Arc<TursoClient>,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(db: Arc<TursoClient>, tokens: Arc<TokenService>) -> Self {
        Self { db, tokens }
    }

    pub async fn sign_up(&self, req: &SignUpRequest) -> Result<User, AuthError> {
        let conn = self.db.connection()?;

        if users::get_by_email(&conn, &req.email).await?.is_some() {
            return Err(AuthError::AlreadyRegistered);
        }

        let hash = hash_password(&req.password)?;
        let user = match users::insert(&conn, &req.name, &req.email, &hash).await {
            Err(AppError::Conflict(_)) => return Err(AuthError::AlreadyRegistered),
            other => other?,
        };

        info!(user_id = user.id, "user registered");
        Ok(user)
    }

    /// Returns a signed access token for valid credentials.
    ///
    /// An unknown email and a wrong password are indistinguishable to the caller.
    pub async fn sign_in(&self, req: &SignInRequest) -> Result<String, AuthError> {
        let conn = self.db.connection()?;

        let user = users::get_by_email(&conn, &req.email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        if !verify_password(&req.password, &user.password_hash)? {
            return Err(AuthError::InvalidCredentials);
        }

        Ok(self.tokens.issue_token(user.id)?)
    }
}
