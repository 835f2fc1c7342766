use crate::models::{timestamp, CreateProductRequest, Product, UpdateProductRequest};
use crate::types::{AppError, Result};
use chrono::Utc;
use libsql::{params, Connection, Row};

const COLUMNS: &str = "id, name, description, price, image, category, stock, store_id, \
                       is_active, created_at, updated_at";

fn from_row(row: &Row) -> Result<Product> {
    Ok(Product {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
        price: row.get(3)?,
        image: row.get(4)?,
        category: row.get(5)?,
        stock: row.get(6)?,
        store_id: row.get(7)?,
        is_active: row.get::<i64>(8)? != 0,
        created_at: timestamp(row.get(9)?)?,
        updated_at: timestamp(row.get(10)?)?,
    })
}

/// Inserts an active product into `store_id`.
pub async fn insert(conn: &Connection, store_id: i64, req: &CreateProductRequest) -> Result<Product> {
    let now = Utc::now().timestamp();

    let mut rows = conn
        .query(
            &format!(
                "INSERT INTO products
                 (name, description, price, image, category, stock, store_id, is_active, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, 1, ?8, ?9) RETURNING {}",
                COLUMNS
            ),
            params![
                req.name.as_str(),
                req.description.as_str(),
                req.price,
                req.image.as_str(),
                req.category.as_str(),
                req.stock,
                store_id,
                now,
                now,
            ],
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create product: {}", e)))?;

    match rows.next().await? {
        Some(row) => from_row(&row),
        None => Err(AppError::Database("Failed to create product: no row returned".to_string())),
    }
}

/// Active products of a store, oldest first.
pub async fn list_active_by_store(conn: &Connection, store_id: i64) -> Result<Vec<Product>> {
    let mut rows = conn
        .query(
            &format!(
                "SELECT {} FROM products WHERE store_id = ?1 AND is_active = 1 ORDER BY id",
                COLUMNS
            ),
            [store_id],
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to query products: {}", e)))?;

    let mut products = Vec::new();
    while let Some(row) = rows.next().await? {
        products.push(from_row(&row)?);
    }

    Ok(products)
}

/// Looks a product up by id, scoped to its owning store.
pub async fn get_by_id_and_store(conn: &Connection, id: i64, store_id: i64) -> Result<Option<Product>> {
    let mut rows = conn
        .query(
            &format!("SELECT {} FROM products WHERE id = ?1 AND store_id = ?2", COLUMNS),
            [id, store_id],
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to query product: {}", e)))?;

    rows.next().await?.map(|row| from_row(&row)).transpose()
}

pub async fn update(
    conn: &Connection,
    id: i64,
    store_id: i64,
    req: &UpdateProductRequest,
) -> Result<Option<Product>> {
    let now = Utc::now().timestamp();

    let mut rows = conn
        .query(
            &format!(
                "UPDATE products SET name = ?1, description = ?2, price = ?3, image = ?4,
                 category = ?5, stock = ?6, is_active = ?7, updated_at = ?8
                 WHERE id = ?9 AND store_id = ?10 RETURNING {}",
                COLUMNS
            ),
            params![
                req.name.as_str(),
                req.description.as_str(),
                req.price,
                req.image.as_str(),
                req.category.as_str(),
                req.stock,
                i64::from(req.is_active),
                now,
                id,
                store_id,
            ],
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to update product: {}", e)))?;

    rows.next().await?.map(|row| from_row(&row)).transpose()
}

/// Hard delete. Returns whether a row matched `(id, store_id)`.
pub async fn delete(conn: &Connection, id: i64, store_id: i64) -> Result<bool> {
    let affected = conn
        .execute(
            "DELETE FROM products WHERE id = ?1 AND store_id = ?2",
            [id, store_id],
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to delete product: {}", e)))?;

    Ok(affected > 0)
}
