//! TOML-based configuration for the server (`umkm.toml`).
//!
//! Every field has a serde default, so an empty file is a valid config.
//! Secrets are never written in the file: `auth.jwt_secret_env` names the
//! environment variable that holds the signing key.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Minimum length of the JWT signing secret, in bytes.
pub const MIN_JWT_SECRET_LEN: usize = 32;

/// Root configuration structure loaded from umkm.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub auth: AuthConfig,

    #[serde(default)]
    pub database: DatabaseConfig,

    #[serde(default)]
    pub orders: OrdersConfig,
}

// ============= Server Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub log_format: LogFormat,

    /// Base URL the public catalog is reachable at, e.g. `https://shop.example.com`.
    /// Used when encoding catalog QR codes; when unset the request's Host header is used.
    #[serde(default)]
    pub public_base_url: Option<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            public_base_url: None,
        }
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

// ============= Authentication Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Environment variable name containing the JWT secret
    #[serde(default = "default_jwt_secret_env")]
    pub jwt_secret_env: String,

    /// Value of the `iss` claim in issued tokens
    #[serde(default = "default_issuer")]
    pub issuer: String,
}

fn default_jwt_secret_env() -> String {
    "JWT_SECRET".to_string()
}

fn default_issuer() -> String {
    "umkm-server".to_string()
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret_env: default_jwt_secret_env(),
            issuer: default_issuer(),
        }
    }
}

// ============= Database Configuration =============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Local database path, or `:memory:`
    #[serde(default = "default_database_url")]
    pub url: String,

    /// Environment variable for Turso URL (optional cloud config)
    #[serde(default)]
    pub turso_url_env: Option<String>,

    /// Environment variable for Turso auth token
    #[serde(default)]
    pub turso_token_env: Option<String>,
}

fn default_database_url() -> String {
    "./data/umkm.db".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            turso_url_env: None,
            turso_token_env: None,
        }
    }
}

// ============= Orders Configuration =============

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OrdersConfig {
    #[serde(default)]
    pub pricing: OrderPricing,
}

/// Where order line prices come from when computing totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderPricing {
    /// Trust the prices sent by the customer.
    #[default]
    ClientSupplied,
    /// Replace each line price with the store's current product price.
    Catalog,
}

// ============= Configuration Loading & Validation =============

/// Errors that can occur during configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize TOML: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Environment variable '{0}' referenced in config is not set")]
    MissingEnvVar(String),
}

impl AppConfig {
    /// Load and validate configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let config = Self::parse_file(path)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse without validating, for tooling that inspects a config
    pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Validate env var availability and value constraints
    pub fn validate(&self) -> Result<(), ConfigError> {
        let secret = self.jwt_secret()?;
        if secret.len() < MIN_JWT_SECRET_LEN {
            return Err(ConfigError::ValidationError(format!(
                "{} must be at least {} bytes",
                self.auth.jwt_secret_env, MIN_JWT_SECRET_LEN
            )));
        }

        if let Some(ref env) = self.database.turso_url_env {
            self.validate_env_var(env)?;
        }
        if let Some(ref env) = self.database.turso_token_env {
            self.validate_env_var(env)?;
        }

        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be non-zero".to_string(),
            ));
        }

        if let Some(ref base) = self.server.public_base_url {
            if !(base.starts_with("http://") || base.starts_with("https://")) {
                return Err(ConfigError::ValidationError(format!(
                    "server.public_base_url must start with http:// or https://, got '{}'",
                    base
                )));
            }
        }

        Ok(())
    }

    fn validate_env_var(&self, name: &str) -> Result<(), ConfigError> {
        std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))?;
        Ok(())
    }

    /// Get the JWT secret from the environment
    pub fn jwt_secret(&self) -> Result<String, ConfigError> {
        std::env::var(&self.auth.jwt_secret_env)
            .map_err(|_| ConfigError::MissingEnvVar(self.auth.jwt_secret_env.clone()))
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> String {
        r#"
[server]
host = "0.0.0.0"
port = 9000
log_level = "debug"
log_format = "json"
public_base_url = "https://toko.example.com"

[auth]
jwt_secret_env = "UMKM_TEST_JWT_SECRET"

[database]
url = ":memory:"

[orders]
pricing = "catalog"
"#
        .to_string()
    }

    #[test]
    fn test_parse_config() {
        let config: AppConfig = toml::from_str(&create_test_config()).expect("Failed to parse config");

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.log_format, LogFormat::Json);
        assert_eq!(
            config.server.public_base_url.as_deref(),
            Some("https://toko.example.com")
        );
        assert_eq!(config.database.url, ":memory:");
        assert_eq!(config.orders.pricing, OrderPricing::Catalog);
        assert_eq!(config.auth.issuer, "umkm-server");
    }

    #[test]
    fn test_empty_file_uses_defaults() {
        let config: AppConfig = toml::from_str("").expect("empty config should parse");

        assert_eq!(config.server.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.server.log_format, LogFormat::Pretty);
        assert_eq!(config.auth.jwt_secret_env, "JWT_SECRET");
        assert_eq!(config.database.url, "./data/umkm.db");
        assert_eq!(config.orders.pricing, OrderPricing::ClientSupplied);
    }

    #[test]
    fn test_unknown_pricing_rejected() {
        let result: Result<AppConfig, _> = toml::from_str("[orders]\npricing = \"haggle\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_validation_missing_secret() {
        let mut config = AppConfig::default();
        config.auth.jwt_secret_env = "UMKM_TEST_SECRET_THAT_IS_NEVER_SET".to_string();

        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingEnvVar(name)) if name == "UMKM_TEST_SECRET_THAT_IS_NEVER_SET"
        ));
    }

    #[test]
    fn test_validation_short_secret() {
        std::env::set_var("UMKM_TEST_SHORT_SECRET", "too-short");
        let mut config = AppConfig::default();
        config.auth.jwt_secret_env = "UMKM_TEST_SHORT_SECRET".to_string();

        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_validation_bad_base_url() {
        std::env::set_var("UMKM_TEST_GOOD_SECRET", "test-secret-at-least-32-characters-long");
        let mut config = AppConfig::default();
        config.auth.jwt_secret_env = "UMKM_TEST_GOOD_SECRET".to_string();
        assert!(config.validate().is_ok());

        config.server.public_base_url = Some("toko.example.com".to_string());
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn test_to_toml_round_trips() {
        let config: AppConfig = toml::from_str(&create_test_config()).expect("parse");
        let rendered = config.to_toml().expect("serialize");
        let reparsed: AppConfig = toml::from_str(&rendered).expect("reparse");

        assert_eq!(reparsed.server.port, 9000);
        assert_eq!(reparsed.orders.pricing, OrderPricing::Catalog);
    }

    #[test]
    fn test_load_missing_file() {
        assert!(matches!(
            AppConfig::load("/definitely/not/here/umkm.toml"),
            Err(ConfigError::FileNotFound(_))
        ));
    }
}
