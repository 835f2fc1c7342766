use chrono::{DateTime, Utc};
use serde::Serialize;

use super::{require, Validate};
use crate::types::{SignInRequest, SignUpRequest};

/// A registered account. The password hash never leaves the server.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

fn looks_like_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && !domain.contains('@')
                && !email.chars().any(char::is_whitespace)
        }
        None => false,
    }
}

impl Validate for SignUpRequest {
    fn validate(&self) -> Result<(), String> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        if !looks_like_email(&self.email) {
            return Err("email must be a valid email address".to_string());
        }
        if self.password.chars().count() < 8 {
            return Err("password must be at least 8 characters".to_string());
        }
        Ok(())
    }
}

impl Validate for SignInRequest {
    fn validate(&self) -> Result<(), String> {
        require("email", &self.email)?;
        require("password", &self.password)
    }
}
