use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{require, require_non_negative, Validate};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    pub stock: i64,
    pub store_id: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateProductRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    pub stock: i64,
}

/// Full replacement, including the active flag.
#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct UpdateProductRequest {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub image: String,
    pub category: String,
    pub stock: i64,
    pub is_active: bool,
}

fn validate_fields(name: &str, price: f64, stock: i64) -> Result<(), String> {
    require("name", name)?;
    require_non_negative("price", price)?;
    if stock < 0 {
        return Err("stock must not be negative".to_string());
    }
    Ok(())
}

impl Validate for CreateProductRequest {
    fn validate(&self) -> Result<(), String> {
        validate_fields(&self.name, self.price, self.stock)
    }
}

impl Validate for UpdateProductRequest {
    fn validate(&self) -> Result<(), String> {
        validate_fields(&self.name, self.price, self.stock)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", 1000.0, 1, "name is required")]
    #[case("Kopi", -1.0, 1, "price must be a non-negative number")]
    #[case("Kopi", f64::NAN, 1, "price must be a non-negative number")]
    #[case("Kopi", 1000.0, -3, "stock must not be negative")]
    fn test_create_rejects(
        #[case] name: &str,
        #[case] price: f64,
        #[case] stock: i64,
        #[case] expected: &str,
    ) {
        let req = CreateProductRequest {
            name: name.into(),
            price,
            stock,
            ..Default::default()
        };
        assert_eq!(req.validate().unwrap_err(), expected);
    }

    #[test]
    fn test_free_product_with_no_stock_is_valid() {
        let req = UpdateProductRequest {
            name: "Sample".into(),
            price: 0.0,
            stock: 0,
            ..Default::default()
        };
        assert!(req.validate().is_ok());
    }
}
