use crate::db::{finish, products, stores, websites, TursoClient};
use crate::models::{CreateWebsiteRequest, Product, Store, UpdateWebsiteRequest, Website};
use crate::types::AppError;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum WebsiteError {
    #[error("store not found")]
    StoreNotFound,

    #[error("website not found")]
    NotFound,

    #[error("website already exists")]
    AlreadyExists,

    #[error("domain is already used by another published website")]
    DomainTaken,

    #[error("catalog not found")]
    CatalogNotFound,

    #[error(transparent)]
    Internal(#[from] AppError),
}

impl From<WebsiteError> for AppError {
    fn from(err: WebsiteError) -> Self {
        match err {
            WebsiteError::StoreNotFound | WebsiteError::NotFound | WebsiteError::CatalogNotFound => {
                AppError::NotFound(err.to_string())
            }
            WebsiteError::AlreadyExists | WebsiteError::DomainTaken => {
                AppError::InvalidInput(err.to_string())
            }
            WebsiteError::Internal(inner) => inner,
        }
    }
}

/// A published store with its active products.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub store: Store,
    pub products: Vec<Product>,
}

/// The caller's storefront and the public catalog it exposes.
#[derive(Clone)]
pub struct WebsiteService {
    db: Arc<TursoClient>,
}

impl WebsiteService {
    pub fn new(db: Arc<TursoClient>) -> Self {
        Self { db }
    }

    /// Creates an unpublished website. A store has at most one.
    pub async fn create(&self, user_id: i64, req: &CreateWebsiteRequest) -> Result<Website, WebsiteError> {
        let tx = self.db.begin().await?;

        let result: Result<Website, WebsiteError> = async {
            let store = stores::get_by_user_id(&tx, user_id)
                .await?
                .ok_or(WebsiteError::StoreNotFound)?;

            if websites::get_by_store_id(&tx, store.id).await?.is_some() {
                return Err(WebsiteError::AlreadyExists);
            }
            match websites::insert(&tx, store.id, req).await {
                Err(AppError::Conflict(_)) => Err(WebsiteError::AlreadyExists),
                other => Ok(other?),
            }
        }
        .await;

        let website = finish(tx, result).await?;
        info!(website_id = website.id, store_id = website.store_id, "website created");
        Ok(website)
    }

    pub async fn get(&self, user_id: i64) -> Result<Website, WebsiteError> {
        let conn = self.db.connection()?;

        let store = stores::get_by_user_id(&conn, user_id)
            .await?
            .ok_or(WebsiteError::StoreNotFound)?;

        websites::get_by_store_id(&conn, store.id)
            .await?
            .ok_or(WebsiteError::NotFound)
    }

    /// Full-field replace, including the published flag.
    ///
    /// Publishing fails when another published website already serves the
    /// same domain.
    pub async fn update(&self, user_id: i64, req: &UpdateWebsiteRequest) -> Result<Website, WebsiteError> {
        let tx = self.db.begin().await?;

        let result: Result<Website, WebsiteError> = async {
            let store = stores::get_by_user_id(&tx, user_id)
                .await?
                .ok_or(WebsiteError::StoreNotFound)?;

            let website = websites::get_by_store_id(&tx, store.id)
                .await?
                .ok_or(WebsiteError::NotFound)?;

            if req.is_published && websites::published_domain_taken(&tx, &req.domain, website.id).await? {
                return Err(WebsiteError::DomainTaken);
            }

            match websites::update(&tx, website.id, req).await {
                Err(AppError::Conflict(_)) => Err(WebsiteError::DomainTaken),
                other => Ok(other?),
            }
        }
        .await;

        let website = finish(tx, result).await?;
        if website.is_published {
            info!(website_id = website.id, domain = %website.domain, "website published");
        }
        Ok(website)
    }

    /// Public catalog lookup. Domains match exactly; drafts are invisible.
    pub async fn catalog(&self, domain: &str) -> Result<Catalog, WebsiteError> {
        let conn = self.db.connection()?;

        let website = websites::get_published_by_domain(&conn, domain)
            .await?
            .ok_or(WebsiteError::CatalogNotFound)?;

        let store = stores::get_by_id(&conn, website.store_id)
            .await?
            .ok_or(WebsiteError::CatalogNotFound)?;

        let products = products::list_active_by_store(&conn, store.id).await?;

        Ok(Catalog { store, products })
    }
}
