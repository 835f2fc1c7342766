use crate::models::{timestamp, CreateWebsiteRequest, UpdateWebsiteRequest, Website};
use crate::types::{AppError, Result};
use chrono::Utc;
use libsql::{params, Connection, Row};

const COLUMNS: &str = "id, store_id, template, custom_css, custom_html, domain, is_published, \
                       created_at, updated_at";

fn from_row(row: &Row) -> Result<Website> {
    Ok(Website {
        id: row.get(0)?,
        store_id: row.get(1)?,
        template: row.get(2)?,
        custom_css: row.get(3)?,
        custom_html: row.get(4)?,
        domain: row.get(5)?,
        is_published: row.get::<i64>(6)? != 0,
        created_at: timestamp(row.get(7)?)?,
        updated_at: timestamp(row.get(8)?)?,
    })
}

/// Inserts an unpublished website for `store_id`.
pub async fn insert(conn: &Connection, store_id: i64, req: &CreateWebsiteRequest) -> Result<Website> {
    let now = Utc::now().timestamp();

    let mut rows = conn
        .query(
            &format!(
                "INSERT INTO websites
                 (store_id, template, custom_css, custom_html, domain, is_published, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, 0, ?6, ?7) RETURNING {}",
                COLUMNS
            ),
            params![
                store_id,
                req.template.as_str(),
                req.custom_css.as_str(),
                req.custom_html.as_str(),
                req.domain.as_str(),
                now,
                now,
            ],
        )
        .await
        .map_err(|e| AppError::from_db("Failed to create website", e))?;

    match rows.next().await? {
        Some(row) => from_row(&row),
        None => Err(AppError::Database("Failed to create website: no row returned".to_string())),
    }
}

pub async fn get_by_store_id(conn: &Connection, store_id: i64) -> Result<Option<Website>> {
    let mut rows = conn
        .query(
            &format!("SELECT {} FROM websites WHERE store_id = ?1", COLUMNS),
            [store_id],
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to query website: {}", e)))?;

    rows.next().await?.map(|row| from_row(&row)).transpose()
}

/// Exact, case-sensitive match against published websites only.
pub async fn get_published_by_domain(conn: &Connection, domain: &str) -> Result<Option<Website>> {
    let mut rows = conn
        .query(
            &format!(
                "SELECT {} FROM websites WHERE domain = ?1 AND is_published = 1",
                COLUMNS
            ),
            [domain],
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to query website: {}", e)))?;

    rows.next().await?.map(|row| from_row(&row)).transpose()
}

pub async fn update(conn: &Connection, id: i64, req: &UpdateWebsiteRequest) -> Result<Website> {
    let now = Utc::now().timestamp();

    let mut rows = conn
        .query(
            &format!(
                "UPDATE websites SET template = ?1, custom_css = ?2, custom_html = ?3,
                 domain = ?4, is_published = ?5, updated_at = ?6
                 WHERE id = ?7 RETURNING {}",
                COLUMNS
            ),
            params![
                req.template.as_str(),
                req.custom_css.as_str(),
                req.custom_html.as_str(),
                req.domain.as_str(),
                i64::from(req.is_published),
                now,
                id,
            ],
        )
        .await
        .map_err(|e| AppError::from_db("Failed to update website", e))?;

    match rows.next().await? {
        Some(row) => from_row(&row),
        None => Err(AppError::Database(format!("Failed to update website {}: no row returned", id))),
    }
}

/// Whether another published website (other than `except_id`) already serves `domain`.
pub async fn published_domain_taken(conn: &Connection, domain: &str, except_id: i64) -> Result<bool> {
    let mut rows = conn
        .query(
            "SELECT 1 FROM websites WHERE domain = ?1 AND is_published = 1 AND id != ?2 LIMIT 1",
            params![domain, except_id],
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to query website: {}", e)))?;

    Ok(rows.next().await?.is_some())
}
