//! Credential store.

use crate::models::{timestamp, User};
use crate::types::{AppError, Result};
use chrono::Utc;
use libsql::{params, Connection, Row};

const COLUMNS: &str = "id, name, email, password_hash, created_at, updated_at";

fn from_row(row: &Row) -> Result<User> {
    Ok(User {
        id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        password_hash: row.get(3)?,
        created_at: timestamp(row.get(4)?)?,
        updated_at: timestamp(row.get(5)?)?,
    })
}

pub async fn insert(conn: &Connection, name: &str, email: &str, password_hash: &str) -> Result<User> {
    let now = Utc::now().timestamp();

    let mut rows = conn
        .query(
            &format!(
                "INSERT INTO users (name, email, password_hash, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5) RETURNING {}",
                COLUMNS
            ),
            params![name, email, password_hash, now, now],
        )
        .await
        .map_err(|e| AppError::from_db("Failed to create user", e))?;

    match rows.next().await? {
        Some(row) => from_row(&row),
        None => Err(AppError::Database("Failed to create user: no row returned".to_string())),
    }
}

pub async fn get_by_email(conn: &Connection, email: &str) -> Result<Option<User>> {
    let mut rows = conn
        .query(
            &format!("SELECT {} FROM users WHERE email = ?1", COLUMNS),
            [email],
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to query user: {}", e)))?;

    rows.next().await?.map(|row| from_row(&row)).transpose()
}

pub async fn get_by_id(conn: &Connection, id: i64) -> Result<Option<User>> {
    let mut rows = conn
        .query(&format!("SELECT {} FROM users WHERE id = ?1", COLUMNS), [id])
        .await
        .map_err(|e| AppError::Database(format!("Failed to query user: {}", e)))?;

    rows.next().await?.map(|row| from_row(&row)).transpose()
}

/// Removes an account outright. No endpoint exposes this; it exists for
/// maintenance and for tests of tokens that outlive their user.
pub async fn delete(conn: &Connection, id: i64) -> Result<()> {
    conn.execute("DELETE FROM users WHERE id = ?1", [id])
        .await
        .map_err(|e| AppError::Database(format!("Failed to delete user: {}", e)))?;
    Ok(())
}
