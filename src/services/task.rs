use crate::db::{tasks, TursoClient};
use crate::models::{CreateTaskRequest, Task, UpdateTaskRequest};
use crate::types::AppError;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum TaskError {
    #[error("todo not found")]
    NotFound,

    #[error(transparent)]
    Internal(#[from] AppError),
}

impl From<TaskError> for AppError {
    fn from(err: TaskError) -> Self {
        match err {
            TaskError::NotFound => AppError::NotFound(err.to_string()),
            TaskError::Internal(inner) => inner,
        }
    }
}

/// Personal to-do list, scoped by `(task_id, user_id)`.
#[derive(Clone)]
pub struct TaskService {
    db: Arc<TursoClient>,
}

impl TaskService {
    pub fn new(db: Arc<TursoClient>) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i64, req: &CreateTaskRequest) -> Result<Task, TaskError> {
        let conn = self.db.connection()?;
        Ok(tasks::insert(&conn, user_id, req).await?)
    }

    pub async fn get(&self, user_id: i64, task_id: i64) -> Result<Task, TaskError> {
        let conn = self.db.connection()?;
        tasks::get_by_id_and_user(&conn, task_id, user_id)
            .await?
            .ok_or(TaskError::NotFound)
    }

    pub async fn list(&self, user_id: i64) -> Result<Vec<Task>, TaskError> {
        let conn = self.db.connection()?;
        Ok(tasks::list_by_user(&conn, user_id).await?)
    }

    pub async fn update(&self, user_id: i64, task_id: i64, req: &UpdateTaskRequest) -> Result<Task, TaskError> {
        let conn = self.db.connection()?;
        tasks::update(&conn, task_id, user_id, req)
            .await?
            .ok_or(TaskError::NotFound)
    }

    pub async fn delete(&self, user_id: i64, task_id: i64) -> Result<(), TaskError> {
        let conn = self.db.connection()?;
        if !tasks::delete(&conn, task_id, user_id).await? {
            return Err(TaskError::NotFound);
        }
        Ok(())
    }
}
