use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{require, Validate};

/// A seller's tenant boundary. Each user owns at most one.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Store {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub logo: String,
    pub address: String,
    pub phone: String,
    /// Contact handle used to build order links.
    pub whatsapp: String,
    pub user_id: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateStoreRequest {
    pub name: String,
    pub description: String,
    pub logo: String,
    pub address: String,
    pub phone: String,
    pub whatsapp: String,
}

/// Full replacement of the caller's store profile.
#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateStoreRequest {
    pub name: String,
    pub description: String,
    pub logo: String,
    pub address: String,
    pub phone: String,
    pub whatsapp: String,
    pub is_active: bool,
}

impl Validate for CreateStoreRequest {
    fn validate(&self) -> Result<(), String> {
        require("name", &self.name)?;
        require("whatsapp", &self.whatsapp)
    }
}

impl Validate for UpdateStoreRequest {
    fn validate(&self) -> Result<(), String> {
        require("name", &self.name)?;
        require("whatsapp", &self.whatsapp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whatsapp_is_required() {
        let req = CreateStoreRequest {
            name: "Warung Sari".into(),
            ..Default::default()
        };
        assert_eq!(req.validate().unwrap_err(), "whatsapp is required");
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let req = UpdateStoreRequest {
            name: "   ".into(),
            whatsapp: "628123".into(),
            ..Default::default()
        };
        assert_eq!(req.validate().unwrap_err(), "name is required");
    }
}
