use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{require, Validate};

/// Legacy personal to-do item, owned directly by a user.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Task {
    pub id: i64,
    pub title: String,
    pub is_complete: bool,
    pub user_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateTaskRequest {
    pub title: String,
    pub is_complete: bool,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateTaskRequest {
    pub title: String,
    pub is_complete: bool,
}

impl Validate for CreateTaskRequest {
    fn validate(&self) -> Result<(), String> {
        require("title", &self.title)
    }
}

impl Validate for UpdateTaskRequest {
    fn validate(&self) -> Result<(), String> {
        require("title", &self.title)
    }
}
