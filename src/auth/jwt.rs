use crate::types::{AppError, Claims, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// Lifetime of every issued token. There is no refresh or revocation.
pub const TOKEN_TTL_HOURS: i64 = 24;

/// Issues and verifies HS256 access tokens carrying a user id.
pub struct TokenService {
    secret: String,
    issuer: String,
}

impl TokenService {
    /// # Arguments
    /// * `secret` - HMAC key; configuration validation requires at least 32 bytes
    /// * `issuer` - Written to the `iss` claim
    pub fn new(secret: impl Into<String>, issuer: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            issuer: issuer.into(),
        }
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Signs a token for `user_id`, valid for [`TOKEN_TTL_HOURS`].
    pub fn issue_token(&self, user_id: i64) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            user_id,
            iat: now.timestamp() as usize,
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp() as usize,
            iss: self.issuer.clone(),
        };

        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
        .map_err(|e| AppError::Internal(format!("Failed to sign token: {}", e)))
    }

    /// Checks signature, algorithm and expiry, returning the embedded claims.
    ///
    /// Tokens signed with any algorithm other than HS256 are rejected.
    pub fn verify_token(&self, token: &str) -> Result<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
        .map_err(|e| AppError::Auth(format!("Invalid token: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECRET: &str = "test-secret-key-that-is-at-least-32-chars";

    fn create_test_service() -> TokenService {
        TokenService::new(SECRET, "umkm-test")
    }

    fn sign(claims: &Claims, algorithm: Algorithm) -> String {
        encode(
            &Header::new(algorithm),
            claims,
            &EncodingKey::from_secret(SECRET.as_bytes()),
        )
        .expect("should sign")
    }

    #[test]
    fn test_issued_token_round_trips_user_id() {
        let service = create_test_service();

        let token = service.issue_token(42).expect("should issue token");
        let claims = service.verify_token(&token).expect("should verify token");

        assert_eq!(claims.user_id, 42);
        assert_eq!(claims.iss, "umkm-test");
    }

    #[test]
    fn test_expiry_is_one_day_after_issue() {
        let service = create_test_service();
        let token = service.issue_token(1).expect("should issue");
        let claims = service.verify_token(&token).expect("should verify");

        assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
    }

    #[test]
    fn test_malformed_token_rejected() {
        let service = create_test_service();
        assert!(matches!(
            service.verify_token("invalid.token.here"),
            Err(AppError::Auth(_))
        ));
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = create_test_service();
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            user_id: 7,
            iat: now - 7200,
            exp: now - 3600,
            iss: "umkm-test".into(),
        };

        assert!(service.verify_token(&sign(&claims, Algorithm::HS256)).is_err());
    }

    #[test]
    fn test_other_algorithm_rejected() {
        let service = create_test_service();
        let now = Utc::now().timestamp() as usize;
        let claims = Claims {
            user_id: 7,
            iat: now,
            exp: now + 3600,
            iss: "umkm-test".into(),
        };

        assert!(service.verify_token(&sign(&claims, Algorithm::HS512)).is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let issuer = TokenService::new("secret-one-that-is-32-chars-long", "a");
        let verifier = TokenService::new("secret-two-that-is-32-chars-long", "a");

        let token = issuer.issue_token(3).expect("should issue");
        assert!(verifier.verify_token(&token).is_err());
    }
}
