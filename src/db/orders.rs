use crate::models::{timestamp, Order, ORDER_STATUS_PENDING};
use crate::types::{AppError, Result};
use chrono::Utc;
use libsql::{params, Connection, Row};

const COLUMNS: &str = "id, store_id, customer_name, customer_phone, items, total_amount, \
                       status, notes, created_at, updated_at";

fn from_row(row: &Row) -> Result<Order> {
    Ok(Order {
        id: row.get(0)?,
        store_id: row.get(1)?,
        customer_name: row.get(2)?,
        customer_phone: row.get(3)?,
        items: row.get(4)?,
        total_amount: row.get(5)?,
        status: row.get(6)?,
        notes: row.get(7)?,
        created_at: timestamp(row.get(8)?)?,
        updated_at: timestamp(row.get(9)?)?,
    })
}

/// Fields of an order about to be persisted.
pub struct NewOrder<'a> {
    pub store_id: i64,
    pub customer_name: &'a str,
    pub customer_phone: &'a str,
    pub items_json: &'a str,
    pub total_amount: f64,
    pub notes: &'a str,
}

/// Inserts a pending order.
pub async fn insert(conn: &Connection, order: &NewOrder<'_>) -> Result<Order> {
    let now = Utc::now().timestamp();

    let mut rows = conn
        .query(
            &format!(
                "INSERT INTO orders
                 (store_id, customer_name, customer_phone, items, total_amount, status, notes, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9) RETURNING {}",
                COLUMNS
            ),
            params![
                order.store_id,
                order.customer_name,
                order.customer_phone,
                order.items_json,
                order.total_amount,
                ORDER_STATUS_PENDING,
                order.notes,
                now,
                now,
            ],
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create order: {}", e)))?;

    match rows.next().await? {
        Some(row) => from_row(&row),
        None => Err(AppError::Database("Failed to create order: no row returned".to_string())),
    }
}

pub async fn list_by_store(conn: &Connection, store_id: i64) -> Result<Vec<Order>> {
    let mut rows = conn
        .query(
            &format!("SELECT {} FROM orders WHERE store_id = ?1 ORDER BY id", COLUMNS),
            [store_id],
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to query orders: {}", e)))?;

    let mut orders = Vec::new();
    while let Some(row) = rows.next().await? {
        orders.push(from_row(&row)?);
    }

    Ok(orders)
}
