use crate::db::{products, stores, TursoClient};
use crate::models::{CreateProductRequest, Product, Store, UpdateProductRequest};
use crate::types::AppError;
use libsql::Connection;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum ProductError {
    #[error("store not found")]
    StoreNotFound,

    #[error("product not found")]
    NotFound,

    #[error(transparent)]
    Internal(#[from] AppError),
}

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        match err {
            ProductError::StoreNotFound | ProductError::NotFound => AppError::NotFound(err.to_string()),
            ProductError::Internal(inner) => inner,
        }
    }
}

/// Products of the caller's store. Every lookup is scoped by `(product_id, store_id)`.
#[derive(Clone)]
pub struct ProductService {
    db: Arc<TursoClient>,
}

impl ProductService {
    pub fn new(db: Arc<TursoClient>) -> Self {
        Self { db }
    }

    async fn caller_store(conn: &Connection, user_id: i64) -> Result<Store, ProductError> {
        stores::get_by_user_id(conn, user_id)
            .await?
            .ok_or(ProductError::StoreNotFound)
    }

    pub async fn create(&self, user_id: i64, req: &CreateProductRequest) -> Result<Product, ProductError> {
        let conn = self.db.connection()?;
        let store = Self::caller_store(&conn, user_id).await?;
        Ok(products::insert(&conn, store.id, req).await?)
    }

    /// Active products only; inactive ones are not listed to the owner either.
    pub async fn list(&self, user_id: i64) -> Result<Vec<Product>, ProductError> {
        let conn = self.db.connection()?;
        let store = Self::caller_store(&conn, user_id).await?;
        Ok(products::list_active_by_store(&conn, store.id).await?)
    }

    pub async fn get(&self, user_id: i64, product_id: i64) -> Result<Product, ProductError> {
        let conn = self.db.connection()?;
        let store = Self::caller_store(&conn, user_id).await?;
        products::get_by_id_and_store(&conn, product_id, store.id)
            .await?
            .ok_or(ProductError::NotFound)
    }

    pub async fn update(
        &self,
        user_id: i64,
        product_id: i64,
        req: &UpdateProductRequest,
    ) -> Result<Product, ProductError> {
        let conn = self.db.connection()?;
        let store = Self::caller_store(&conn, user_id).await?;
        products::update(&conn, product_id, store.id, req)
            .await?
            .ok_or(ProductError::NotFound)
    }

    pub async fn delete(&self, user_id: i64, product_id: i64) -> Result<(), ProductError> {
        let conn = self.db.connection()?;
        let store = Self::caller_store(&conn, user_id).await?;

        if !products::delete(&conn, product_id, store.id).await? {
            return Err(ProductError::NotFound);
        }
        Ok(())
    }
}
