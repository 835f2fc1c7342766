use crate::models::{Order, Product, Store};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// ============= Authentication Types =============

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Signed token payload. `user_id` is the only application claim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    pub user_id: i64,
    pub iat: usize,
    pub exp: usize,
    pub iss: String,
}

// ============= Response Envelopes =============

/// `{message}` acknowledgement.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{message?, data}` envelope used by the owner-facing endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DataResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            message: None,
            data,
        }
    }

    pub fn with_message(message: impl Into<String>, data: T) -> Self {
        Self {
            message: Some(message.into()),
            data,
        }
    }
}

/// `{data, count}` envelope for list endpoints.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ListResponse<T> {
    pub data: Vec<T>,
    pub count: usize,
}

impl<T> From<Vec<T>> for ListResponse<T> {
    fn from(data: Vec<T>) -> Self {
        let count = data.len();
        Self { data, count }
    }
}

/// Public catalog body: the store and its active products.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CatalogResponse {
    pub store: Store,
    pub products: Vec<Product>,
    pub count: usize,
}

/// Body returned to a customer who placed an order.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct OrderCreatedResponse {
    pub message: String,
    pub order: Order,
    pub whatsapp_url: String,
    pub instructions: String,
}

// ============= Error Types =============

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A write hit a unique constraint.
    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Wraps a database error with `context`, keeping unique-constraint
    /// violations apart as [`AppError::Conflict`].
    pub fn from_db(context: &str, e: libsql::Error) -> Self {
        if is_unique_violation(&e) {
            AppError::Conflict(format!("{}: {}", context, e))
        } else {
            AppError::Database(format!("{}: {}", context, e))
        }
    }
}

fn is_unique_violation(e: &libsql::Error) -> bool {
    e.to_string().contains("UNIQUE constraint failed")
}

impl From<libsql::Error> for AppError {
    fn from(e: libsql::Error) -> Self {
        if is_unique_violation(&e) {
            AppError::Conflict(e.to_string())
        } else {
            AppError::Database(e.to_string())
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Auth(msg) => {
                tracing::debug!("rejecting request: {}", msg);
                (axum::http::StatusCode::UNAUTHORIZED, "unauthorized".to_string())
            }
            AppError::NotFound(msg) => (axum::http::StatusCode::NOT_FOUND, msg),
            AppError::InvalidInput(msg) => (axum::http::StatusCode::BAD_REQUEST, msg),
            AppError::Conflict(msg) => {
                tracing::debug!("write conflict: {}", msg);
                (axum::http::StatusCode::BAD_REQUEST, "resource already exists".to_string())
            }
            AppError::Database(msg) | AppError::Internal(msg) => {
                tracing::error!("request failed: {}", msg);
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        let body = serde_json::json!({
            "error": message
        });

        (status, axum::Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, response::IntoResponse};

    #[test]
    fn test_status_mapping() {
        let cases = [
            (AppError::Auth("expired".into()), StatusCode::UNAUTHORIZED),
            (AppError::NotFound("product not found".into()), StatusCode::NOT_FOUND),
            (AppError::InvalidInput("name is required".into()), StatusCode::BAD_REQUEST),
            (AppError::Conflict("UNIQUE constraint failed".into()), StatusCode::BAD_REQUEST),
            (AppError::Database("disk I/O".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (AppError::Internal("boom".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }

    #[test]
    fn test_list_response_counts_items() {
        let list = ListResponse::from(vec![1, 2, 3]);
        assert_eq!(list.count, 3);
    }

    #[test]
    fn test_data_response_omits_absent_message() {
        let value = serde_json::to_value(DataResponse::new(7)).expect("serialize");
        assert!(value.get("message").is_none());
        assert_eq!(value["data"], 7);
    }
}
