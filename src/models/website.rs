use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{require, Validate};

/// A store's public storefront. The catalog is reachable by `domain` only
/// while `is_published` is set.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Website {
    pub id: i64,
    pub store_id: i64,
    pub template: String,
    pub custom_css: String,
    pub custom_html: String,
    pub domain: String,
    pub is_published: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateWebsiteRequest {
    pub template: String,
    pub custom_css: String,
    pub custom_html: String,
    pub domain: String,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateWebsiteRequest {
    pub template: String,
    pub custom_css: String,
    pub custom_html: String,
    pub domain: String,
    pub is_published: bool,
}

impl Validate for CreateWebsiteRequest {
    fn validate(&self) -> Result<(), String> {
        require("template", &self.template)
    }
}

impl Validate for UpdateWebsiteRequest {
    fn validate(&self) -> Result<(), String> {
        require("template", &self.template)
    }
}
