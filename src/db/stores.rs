use crate::models::{timestamp, CreateStoreRequest, Store, UpdateStoreRequest};
use crate::types::{AppError, Result};
use chrono::Utc;
use libsql::{params, Connection, Row};

const COLUMNS: &str = "id, name, description, logo, address, phone, whatsapp, user_id, \
                       is_active, created_at, updated_at";

fn from_row(row: &Row) -> Result<Store> {
    Ok(Store {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        logo: row.get(3)?,
        address: row.get(4)?,
        phone: row.get(5)?,
        whatsapp: row.get(6)?,
        user_id: row.get(7)?,
        is_active: row.get::<i64>(8)? != 0,
        created_at: timestamp(row.get(9)?)?,
        updated_at: timestamp(row.get(10)?)?,
    })
}

/// Inserts an active store owned by `user_id`.
pub async fn insert(conn: &Connection, user_id: i64, req: &CreateStoreRequest) -> Result<Store> {
    let now = Utc::now().timestamp();

    let mut rows = conn
        .query(
            &format!(
                "INSERT INTO stores
                 (name, description, logo, address, phone, whatsapp, user_id, is_active, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 1, ?8, ?9) RETURNING {}",
                COLUMNS
            ),
            params![
                req.name.as_str(),
                req.description.as_str(),
                req.logo.as_str(),
                req.address.as_str(),
                req.phone.as_str(),
                req.whatsapp.as_str(),
                user_id,
                now,
                now,
            ],
        )
        .await
        .map_err(|e| AppError::from_db("Failed to create store", e))?;

    match rows.next().await? {
        Some(row) => from_row(&row),
        None => Err(AppError::Database("Failed to create store: no row returned".to_string())),
    }
}

pub async fn get_by_id(conn: &Connection, id: i64) -> Result<Option<Store>> {
    let mut rows = conn
        .query(&format!("SELECT {} FROM stores WHERE id = ?1", COLUMNS), [id])
        .await
        .map_err(|e| AppError::Database(format!("Failed to query store: {}", e)))?;

    rows.next().await?.map(|row| from_row(&row)).transpose()
}

pub async fn get_by_user_id(conn: &Connection, user_id: i64) -> Result<Option<Store>> {
    let mut rows = conn
        .query(
            &format!("SELECT {} FROM stores WHERE user_id = ?1 ORDER BY id LIMIT 1", COLUMNS),
            [user_id],
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to query store: {}", e)))?;

    rows.next().await?.map(|row| from_row(&row)).transpose()
}

/// Replaces every mutable field of store `id`.
pub async fn update(conn: &Connection, id: i64, req: &UpdateStoreRequest) -> Result<Store> {
    let now = Utc::now().timestamp();

    let mut rows = conn
        .query(
            &format!(
                "UPDATE stores SET name = ?1, description = ?2, logo = ?3, address = ?4,
                 phone = ?5, whatsapp = ?6, is_active = ?7, updated_at = ?8
                 WHERE id = ?9 RETURNING {}",
                COLUMNS
            ),
            params![
                req.name.as_str(),
                req.description.as_str(),
                req.logo.as_str(),
                req.address.as_str(),
                req.phone.as_str(),
                req.whatsapp.as_str(),
                i64::from(req.is_active),
                now,
                id,
            ],
        )
        .await
        .map_err(|e| AppError::from_db("Failed to update store", e))?;

    match rows.next().await? {
        Some(row) => from_row(&row),
        None => Err(AppError::Database(format!("Failed to update store {}: no row returned", id))),
    }
}
