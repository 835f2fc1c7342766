//! Selects the relational backend from configuration.
//!
//! ```rust,ignore
//! use umkm::db::DatabaseProvider;
//!
//! let db = DatabaseProvider::Memory.create_client().await?;
//! let db = DatabaseProvider::SQLite { path: "data/umkm.db".into() }.create_client().await?;
//! ```

use super::turso::TursoClient;
use crate::types::Result;
use crate::utils::toml_config::DatabaseConfig;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DatabaseProvider {
    /// In-memory SQLite database (ephemeral, lost on restart)
    #[default]
    Memory,
    /// File-based SQLite database
    SQLite {
        /// Path to the SQLite database file
        path: String,
    },
    /// Remote Turso database
    #[cfg(feature = "turso")]
    Turso {
        /// The Turso database URL (e.g., `libsql://your-db.turso.io`)
        url: String,
        /// Authentication token for the Turso database
        auth_token: String,
    },
}

impl DatabaseProvider {
    pub async fn create_client(&self) -> Result<TursoClient> {
        match self {
            DatabaseProvider::Memory => TursoClient::new_memory().await,
            DatabaseProvider::SQLite { path } => TursoClient::new_local(path).await,
            #[cfg(feature = "turso")]
            DatabaseProvider::Turso { url, auth_token } => {
                TursoClient::new_remote(url.clone(), auth_token.clone()).await
            }
        }
    }

    /// Backend name, safe to log.
    pub fn kind(&self) -> &'static str {
        match self {
            DatabaseProvider::Memory => "memory",
            DatabaseProvider::SQLite { .. } => "sqlite",
            #[cfg(feature = "turso")]
            DatabaseProvider::Turso { .. } => "turso",
        }
    }

    /// Resolves the backend from the `[database]` section.
    ///
    /// A remote database is chosen when both Turso env vars are named and set;
    /// otherwise `url` selects a file, or memory for `:memory:`.
    pub fn from_config(config: &DatabaseConfig) -> Self {
        #[cfg(feature = "turso")]
        {
            if let (Some(url_env), Some(token_env)) = (&config.turso_url_env, &config.turso_token_env) {
                if let (Ok(url), Ok(token)) = (std::env::var(url_env), std::env::var(token_env)) {
                    if !url.is_empty() && !token.is_empty() {
                        return DatabaseProvider::Turso {
                            url,
                            auth_token: token,
                        };
                    }
                }
            }
        }

        if config.url.is_empty() || config.url == ":memory:" {
            DatabaseProvider::Memory
        } else {
            DatabaseProvider::SQLite {
                path: config.url.clone(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_url_selects_memory() {
        let config = DatabaseConfig {
            url: ":memory:".to_string(),
            ..Default::default()
        };
        assert_eq!(DatabaseProvider::from_config(&config), DatabaseProvider::Memory);
    }

    #[test]
    fn test_file_url_selects_sqlite() {
        let config = DatabaseConfig {
            url: "./data/shop.db".to_string(),
            ..Default::default()
        };
        assert_eq!(
            DatabaseProvider::from_config(&config),
            DatabaseProvider::SQLite {
                path: "./data/shop.db".to_string()
            }
        );
    }
}
