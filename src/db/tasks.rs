use crate::models::{timestamp, CreateTaskRequest, Task, UpdateTaskRequest};
use crate::types::{AppError, Result};
use chrono::Utc;
use libsql::{params, Connection, Row};

const COLUMNS: &str = "id, title, is_complete, user_id, created_at, updated_at";

fn from_row(row: &Row) -> Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        title: row.get(1)?,
        is_complete: row.get::<i64>(2)? != 0,
        user_id: row.get(3)?,
        created_at: timestamp(row.get(4)?)?,
        updated_at: timestamp(row.get(5)?)?,
    })
}

pub async fn insert(conn: &Connection, user_id: i64, req: &CreateTaskRequest) -> Result<Task> {
    let now = Utc::now().timestamp();

    let mut rows = conn
        .query(
            &format!(
                "INSERT INTO tasks (title, is_complete, user_id, created_at, updated_at)
                 VALUES (?1, ?2, ?3, ?4, ?5) RETURNING {}",
                COLUMNS
            ),
            params![req.title.as_str(), i64::from(req.is_complete), user_id, now, now],
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to create task: {}", e)))?;

    match rows.next().await? {
        Some(row) => from_row(&row),
        None => Err(AppError::Database("Failed to create task: no row returned".to_string())),
    }
}

pub async fn get_by_id_and_user(conn: &Connection, id: i64, user_id: i64) -> Result<Option<Task>> {
    let mut rows = conn
        .query(
            &format!("SELECT {} FROM tasks WHERE id = ?1 AND user_id = ?2", COLUMNS),
            [id, user_id],
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to query task: {}", e)))?;

    rows.next().await?.map(|row| from_row(&row)).transpose()
}

pub async fn list_by_user(conn: &Connection, user_id: i64) -> Result<Vec<Task>> {
    let mut rows = conn
        .query(
            &format!("SELECT {} FROM tasks WHERE user_id = ?1 ORDER BY id", COLUMNS),
            [user_id],
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to query tasks: {}", e)))?;

    let mut tasks = Vec::new();
    while let Some(row) = rows.next().await? {
        tasks.push(from_row(&row)?);
    }

    Ok(tasks)
}

pub async fn update(
    conn: &Connection,
    id: i64,
    user_id: i64,
    req: &UpdateTaskRequest,
) -> Result<Option<Task>> {
    let now = Utc::now().timestamp();

    let mut rows = conn
        .query(
            &format!(
                "UPDATE tasks SET title = ?1, is_complete = ?2, updated_at = ?3
                 WHERE id = ?4 AND user_id = ?5 RETURNING {}",
                COLUMNS
            ),
            params![req.title.as_str(), i64::from(req.is_complete), now, id, user_id],
        )
        .await
        .map_err(|e| AppError::Database(format!("Failed to update task: {}", e)))?;

    rows.next().await?.map(|row| from_row(&row)).transpose()
}

pub async fn delete(conn: &Connection, id: i64, user_id: i64) -> Result<bool> {
    let affected = conn
        .execute("DELETE FROM tasks WHERE id = ?1 AND user_id = ?2", [id, user_id])
        .await
        .map_err(|e| AppError::Database(format!("Failed to delete task: {}", e)))?;

    Ok(affected > 0)
}
