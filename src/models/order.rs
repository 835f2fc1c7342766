use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{require, require_non_negative, Validate};

/// Status assigned to every new order. No transition API exists.
pub const ORDER_STATUS_PENDING: &str = "pending";

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Order {
    pub id: i64,
    pub store_id: i64,
    pub customer_name: String,
    pub customer_phone: String,
    /// JSON-encoded line items, stored and returned as an opaque string.
    pub items: String,
    pub total_amount: f64,
    pub status: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct OrderItem {
    pub product_id: i64,
    pub quantity: i64,
    pub price: f64,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.price * self.quantity as f64
    }
}

#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CreateOrderRequest {
    pub items: Vec<OrderItem>,
    pub customer_name: String,
    pub customer_phone: String,
    pub notes: String,
}

impl Validate for CreateOrderRequest {
    fn validate(&self) -> Result<(), String> {
        if self.items.is_empty() {
            return Err("items must contain at least one item".to_string());
        }
        require("customer_name", &self.customer_name)?;
        require("customer_phone", &self.customer_phone)?;

        for (idx, item) in self.items.iter().enumerate() {
            if item.quantity < 1 {
                return Err(format!("items[{}].quantity must be at least 1", idx));
            }
            require_non_negative(&format!("items[{}].price", idx), item.price)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(items: Vec<OrderItem>) -> CreateOrderRequest {
        CreateOrderRequest {
            items,
            customer_name: "Budi".into(),
            customer_phone: "0812".into(),
            notes: String::new(),
        }
    }

    #[test]
    fn test_empty_items_rejected() {
        let err = request(vec![]).validate().unwrap_err();
        assert_eq!(err, "items must contain at least one item");
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let err = request(vec![OrderItem {
            product_id: 1,
            quantity: 0,
            price: 100.0,
        }])
        .validate()
        .unwrap_err();
        assert_eq!(err, "items[0].quantity must be at least 1");
    }

    #[test]
    fn test_negative_price_rejected() {
        let err = request(vec![
            OrderItem {
                product_id: 1,
                quantity: 1,
                price: 100.0,
            },
            OrderItem {
                product_id: 2,
                quantity: 1,
                price: -5.0,
            },
        ])
        .validate()
        .unwrap_err();
        assert_eq!(err, "items[1].price must be a non-negative number");
    }

    #[test]
    fn test_line_total() {
        let item = OrderItem {
            product_id: 9,
            quantity: 3,
            price: 2500.0,
        };
        assert_eq!(item.line_total(), 7500.0);
    }
}
