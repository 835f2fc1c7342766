use crate::types::{AppError, Result};
use libsql::{Builder, Connection, Database, Transaction, TransactionBehavior};
use std::time::Duration;
use tracing::debug;

/// How long a file-database connection waits for another writer's lock.
pub const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Handle to the relational store backing every repository.
///
/// In-memory databases only live as long as their connection, so
/// [`TursoClient::new_memory`] keeps one shared connection and hands out
/// clones of it. File and remote databases open a fresh connection per call;
/// file connections wait up to [`BUSY_TIMEOUT`] for a competing writer.
pub struct TursoClient {
    db: Database,
    shared: Option<Connection>,
    local_file: bool,
}

impl TursoClient {
    /// Ephemeral database, lost on drop. Used by tests and `url = ":memory:"`.
    pub async fn new_memory() -> Result<Self> {
        let db = Builder::new_local(":memory:")
            .build()
            .await
            .map_err(|e| AppError::Database(format!("Failed to open in-memory database: {}", e)))?;
        let shared = db
            .connect()
            .map_err(|e| AppError::Database(format!("Failed to get connection: {}", e)))?;

        let client = Self {
            db,
            shared: Some(shared),
            local_file: false,
        };
        client.initialize_schema().await?;

        Ok(client)
    }

    pub async fn new_local(path: &str) -> Result<Self> {
        if path == ":memory:" {
            return Self::new_memory().await;
        }

        if let Some(parent) = std::path::Path::new(path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    AppError::Database(format!("Failed to create database directory: {}", e))
                })?;
            }
        }

        let db = Builder::new_local(path)
            .build()
            .await
            .map_err(|e| AppError::Database(format!("Failed to open {}: {}", path, e)))?;

        let client = Self {
            db,
            shared: None,
            local_file: true,
        };
        client.enable_wal().await?;
        client.initialize_schema().await?;

        Ok(client)
    }

    #[cfg(feature = "turso")]
    pub async fn new_remote(url: String, auth_token: String) -> Result<Self> {
        let db = Builder::new_remote(url, auth_token)
            .build()
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Turso: {}", e)))?;

        let client = Self {
            db,
            shared: None,
            local_file: false,
        };
        client.initialize_schema().await?;

        Ok(client)
    }

    pub fn connection(&self) -> Result<Connection> {
        if let Some(conn) = &self.shared {
            return Ok(conn.clone());
        }

        let conn = self
            .db
            .connect()
            .map_err(|e| AppError::Database(format!("Failed to get connection: {}", e)))?;

        if self.local_file {
            conn.busy_timeout(BUSY_TIMEOUT)
                .map_err(|e| AppError::Database(format!("Failed to set busy timeout: {}", e)))?;
        }

        Ok(conn)
    }

    /// Opens a write transaction. Pair with [`finish`] to commit or roll back.
    /// Takes the write lock up front (`BEGIN IMMEDIATE`).
    pub async fn begin(&self) -> Result<Transaction> {
        self.connection()?
            .transaction_with_behavior(TransactionBehavior::Immediate)
            .await
            .map_err(|e| AppError::Database(format!("Failed to begin transaction: {}", e)))
    }

    /// Switches a file database to write-ahead logging.
    async fn enable_wal(&self) -> Result<()> {
        let conn = self.connection()?;
        let mut rows = conn
            .query("PRAGMA journal_mode=WAL", ())
            .await
            .map_err(|e| AppError::Database(format!("Failed to enable WAL: {}", e)))?;
        while rows.next().await?.is_some() {}
        Ok(())
    }

    async fn initialize_schema(&self) -> Result<()> {
        let conn = self.connection()?;

        // Users table
        conn.execute(
            "CREATE TABLE IF NOT EXISTS users (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL
            )",
            (),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create users table: {}", e)))?;

        // Stores table, one per user
        conn.execute(
            "CREATE TABLE IF NOT EXISTS stores (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                logo TEXT NOT NULL DEFAULT '',
                address TEXT NOT NULL DEFAULT '',
                phone TEXT NOT NULL DEFAULT '',
                whatsapp TEXT NOT NULL,
                user_id INTEGER NOT NULL UNIQUE,
                is_active INTEGER NOT NULL DEFAULT 1,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                FOREIGN KEY (user_id) REFERENCES users(id)
            )",
            (),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create stores table: {}", e)))?;

        // Products table
        conn.execute(
            "CREATE TABLE IF NOT EXISTS products (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                description TEXT NOT NULL DEFAULT '',
                price REAL NOT NULL,
                image TEXT NOT NULL DEFAULT '',
                category TEXT NOT NULL DEFAULT '',
                stock INTEGER NOT NULL DEFAULT 0,
                store_id INTEGER NOT NULL,
                is_active INTEGER NOT NULL DEFAULT 1,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                FOREIGN KEY (store_id) REFERENCES stores(id)
            )",
            (),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create products table: {}", e)))?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_products_store ON products(store_id)",
            (),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create products index: {}", e)))?;

        // Websites table, one per store
        conn.execute(
            "CREATE TABLE IF NOT EXISTS websites (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                store_id INTEGER NOT NULL UNIQUE,
                template TEXT NOT NULL,
                custom_css TEXT NOT NULL DEFAULT '',
                custom_html TEXT NOT NULL DEFAULT '',
                domain TEXT NOT NULL DEFAULT '',
                is_published INTEGER NOT NULL DEFAULT 0,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                FOREIGN KEY (store_id) REFERENCES stores(id)
            )",
            (),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create websites table: {}", e)))?;

        // Published domains must be unique; drafts may share a domain
        conn.execute(
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_websites_published_domain
             ON websites(domain) WHERE is_published = 1",
            (),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create websites index: {}", e)))?;

        // Orders table
        conn.execute(
            "CREATE TABLE IF NOT EXISTS orders (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                store_id INTEGER NOT NULL,
                customer_name TEXT NOT NULL,
                customer_phone TEXT NOT NULL,
                items TEXT NOT NULL,
                total_amount REAL NOT NULL,
                status TEXT NOT NULL,
                notes TEXT NOT NULL DEFAULT '',
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                FOREIGN KEY (store_id) REFERENCES stores(id)
            )",
            (),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create orders table: {}", e)))?;

        conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_orders_store ON orders(store_id)",
            (),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create orders index: {}", e)))?;

        // Legacy tasks table
        conn.execute(
            "CREATE TABLE IF NOT EXISTS tasks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                is_complete INTEGER NOT NULL DEFAULT 0,
                user_id INTEGER NOT NULL,
                created_at INTEGER NOT NULL,
                updated_at INTEGER NOT NULL,
                FOREIGN KEY (user_id) REFERENCES users(id)
            )",
            (),
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create tasks table: {}", e)))?;

        debug!("database schema ready");
        Ok(())
    }
}

/// Commits `tx` when `result` is `Ok`, rolls it back otherwise.
pub async fn finish<T, E>(tx: Transaction, result: std::result::Result<T, E>) -> std::result::Result<T, E>
where
    E: From<AppError>,
{
    match result {
        Ok(value) => {
            tx.commit()
                .await
                .map_err(|e| AppError::Database(format!("Failed to commit transaction: {}", e)))?;
            Ok(value)
        }
        Err(err) => {
            if let Err(e) = tx.rollback().await {
                tracing::warn!("rollback failed: {}", e);
            }
            Err(err)
        }
    }
}
