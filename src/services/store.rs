use crate::db::{finish, stores, TursoClient};
use crate::models::{CreateStoreRequest, Store, UpdateStoreRequest};
use crate::types::AppError;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store not found")]
    NotFound,

    #[error("store already exists")]
    AlreadyExists,

    #[error(transparent)]
    Internal(#[from] AppError),
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => AppError::NotFound(err.to_string()),
            StoreError::AlreadyExists => AppError::InvalidInput(err.to_string()),
            StoreError::Internal(inner) => inner,
        }
    }
}

/// A user's single store.
#[derive(Clone)]
pub struct StoreService {
    db: Arc<TursoClient>,
}

impl StoreService {
    pub fn new(db: Arc<TursoClient>) -> Self {
        Self { db }
    }

    /// Creates the caller's store. A user owns at most one.
    pub async fn create(&self, user_id: i64, req: &CreateStoreRequest) -> Result<Store, StoreError> {
        let tx = self.db.begin().await?;

        let result: Result<Store, StoreError> = async {
            if stores::get_by_user_id(&tx, user_id).await?.is_some() {
                return Err(StoreError::AlreadyExists);
            }
            match stores::insert(&tx, user_id, req).await {
                Err(AppError::Conflict(_)) => Err(StoreError::AlreadyExists),
                other => Ok(other?),
            }
        }
        .await;

        let store = finish(tx, result).await?;
        info!(store_id = store.id, user_id, "store created");
        Ok(store)
    }

    pub async fn get_by_user(&self, user_id: i64) -> Result<Store, StoreError> {
        let conn = self.db.connection()?;
        stores::get_by_user_id(&conn, user_id)
            .await?
            .ok_or(StoreError::NotFound)
    }

    /// Full-field replace of the caller's store.
    pub async fn update(&self, user_id: i64, req: &UpdateStoreRequest) -> Result<Store, StoreError> {
        let tx = self.db.begin().await?;

        let result: Result<Store, StoreError> = async {
            let store = stores::get_by_user_id(&tx, user_id)
                .await?
                .ok_or(StoreError::NotFound)?;
            Ok(stores::update(&tx, store.id, req).await?)
        }
        .await;

        finish(tx, result).await
    }
}
