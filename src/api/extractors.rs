//! Request body and path helpers shared by the handlers.

use crate::models::Validate;
use crate::types::AppError;
use axum::extract::rejection::JsonRejection;
use axum::Json;

/// Extract a JSON body, mapping deserialization errors to [`AppError::InvalidInput`].
///
/// Handlers take the body as `Result<Json<T>, JsonRejection>` so malformed
/// input renders as a `{error}` 400 instead of axum's plain-text rejection.
pub fn extract_json<T>(result: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    result
        .map(|Json(v)| v)
        .map_err(|err| AppError::InvalidInput(err.body_text()))
}

/// Extract a JSON body and run its [`Validate`] rules.
pub fn extract_validated_json<T: Validate>(
    result: Result<Json<T>, JsonRejection>,
) -> Result<T, AppError> {
    let value = extract_json(result)?;
    value.validate().map_err(AppError::InvalidInput)?;
    Ok(value)
}

/// Parses a numeric path id, answering 400 `invalid {what} id` otherwise.
pub fn parse_id(raw: &str, what: &str) -> Result<i64, AppError> {
    raw.parse::<i64>()
        .map_err(|_| AppError::InvalidInput(format!("invalid {} id", what)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42", "product").expect("numeric id"), 42);

        match parse_id("abc", "product") {
            Err(AppError::InvalidInput(msg)) => assert_eq!(msg, "invalid product id"),
            other => panic!("expected invalid input, got {:?}", other),
        }
    }
}
