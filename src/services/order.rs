use crate::db::{finish, orders, products, stores, TursoClient};
use crate::models::{CreateOrderRequest, Order, OrderItem, Store};
use crate::types::AppError;
use crate::utils::toml_config::OrderPricing;
use std::fmt::Write;
use std::sync::Arc;
use tracing::info;

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("store not found")]
    StoreNotFound,

    #[error("{0}")]
    Validation(String),

    #[error(transparent)]
    Internal(#[from] AppError),
}

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        match err {
            OrderError::StoreNotFound => AppError::NotFound(err.to_string()),
            OrderError::Validation(msg) => AppError::InvalidInput(msg),
            OrderError::Internal(inner) => inner,
        }
    }
}

/// A stored order and the link that sends it to the store over WhatsApp.
#[derive(Debug, Clone)]
pub struct PlacedOrder {
    pub order: Order,
    pub whatsapp_url: String,
}

/// Order placement and the owner's order list.
#[derive(Clone)]
pub struct OrderService {
    db: Arc<TursoClient>,
    pricing: OrderPricing,
}

impl OrderService {
    pub fn new(db: Arc<TursoClient>, pricing: OrderPricing) -> Self {
        Self { db, pricing }
    }

    pub fn pricing(&self) -> OrderPricing {
        self.pricing
    }

    /// Places a pending order with `store_id` and builds its contact link.
    ///
    /// The total is computed once here and never recomputed.
    pub async fn create(&self, store_id: i64, req: &CreateOrderRequest) -> Result<PlacedOrder, OrderError> {
        let tx = self.db.begin().await?;

        let result: Result<(Store, Order, Vec<(String, OrderItem)>), OrderError> = async {
            let store = stores::get_by_id(&tx, store_id)
                .await?
                .ok_or(OrderError::StoreNotFound)?;

            let mut items = req.items.clone();
            let mut named = Vec::with_capacity(items.len());

            for item in items.iter_mut() {
                let product = products::get_by_id_and_store(&tx, item.product_id, store.id).await?;

                if self.pricing == OrderPricing::Catalog {
                    match &product {
                        Some(p) if p.is_active => item.price = p.price,
                        _ => {
                            return Err(OrderError::Validation(format!(
                                "product {} is not available in this store",
                                item.product_id
                            )))
                        }
                    }
                }

                if let Some(p) = product {
                    named.push((p.name, item.clone()));
                }
            }

            let total = order_total(&items)?;
            let items_json = serde_json::to_string(&items)
                .map_err(|e| AppError::Internal(format!("Failed to encode order items: {}", e)))?;

            let order = orders::insert(
                &tx,
                &orders::NewOrder {
                    store_id: store.id,
                    customer_name: &req.customer_name,
                    customer_phone: &req.customer_phone,
                    items_json: &items_json,
                    total_amount: total,
                    notes: &req.notes,
                },
            )
            .await?;

            Ok((store, order, named))
        }
        .await;

        let (store, order, named) = finish(tx, result).await?;
        info!(order_id = order.id, store_id = store.id, total = order.total_amount, "order placed");

        let message = order_message(&order, &named);
        let whatsapp_url = whatsapp_link(&store.whatsapp, &message);

        Ok(PlacedOrder { order, whatsapp_url })
    }

    /// Every order of the caller's store, regardless of status.
    pub async fn list(&self, user_id: i64) -> Result<Vec<Order>, OrderError> {
        let conn = self.db.connection()?;

        let store = stores::get_by_user_id(&conn, user_id)
            .await?
            .ok_or(OrderError::StoreNotFound)?;

        Ok(orders::list_by_store(&conn, store.id).await?)
    }
}

/// Sum of every line total. Rejects lines or sums that overflow to infinity.
pub fn order_total(items: &[OrderItem]) -> Result<f64, OrderError> {
    let mut total = 0.0;

    for (idx, item) in items.iter().enumerate() {
        let line = item.line_total();
        if !line.is_finite() {
            return Err(OrderError::Validation(format!("items[{}] total is out of range", idx)));
        }
        total += line;
    }

    if !total.is_finite() {
        return Err(OrderError::Validation("order total is out of range".to_string()));
    }
    Ok(total)
}

/// Renders the Indonesian order summary sent to the store.
///
/// Only lines whose product name resolved are itemized; the total covers
/// every line.
pub fn order_message(order: &Order, lines: &[(String, OrderItem)]) -> String {
    let mut msg = String::new();

    let _ = write!(msg, "*Pesanan Baru #{}*\n\n", order.id);
    let _ = writeln!(msg, "Nama: {}", order.customer_name);
    let _ = write!(msg, "Telepon: {}\n\n", order.customer_phone);
    msg.push_str("*Detail Pesanan:*\n");

    for (name, item) in lines {
        let _ = writeln!(
            msg,
            "- {} x{} = Rp {:.0}",
            name,
            item.quantity,
            item.line_total()
        );
    }

    let _ = writeln!(msg, "\n*Total: Rp {:.0}*", order.total_amount);

    if !order.notes.is_empty() {
        let _ = write!(msg, "\nCatatan: {}", order.notes);
    }

    msg
}

/// `https://wa.me/{number}?text={message}` with the message percent-encoded.
///
/// Spaces become `%20` rather than the form-style `+`.
pub fn whatsapp_link(number: &str, message: &str) -> String {
    format!("https://wa.me/{}?text={}", number, urlencoding::encode(message))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn order(total: f64, notes: &str) -> Order {
        Order {
            id: 12,
            store_id: 1,
            customer_name: "Siti".into(),
            customer_phone: "08123".into(),
            items: "[]".into(),
            total_amount: total,
            status: "pending".into(),
            notes: notes.into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn item(product_id: i64, quantity: i64, price: f64) -> OrderItem {
        OrderItem {
            product_id,
            quantity,
            price,
        }
    }

    #[test]
    fn test_total_uses_line_prices() {
        let items = [item(1, 2, 10000.0), item(2, 1, 5000.0)];
        assert_eq!(order_total(&items).expect("finite total"), 25000.0);
    }

    #[test]
    fn test_total_rejects_overflowing_line() {
        let result = order_total(&[item(1, 10, 1e308)]);
        match result {
            Err(OrderError::Validation(msg)) => assert_eq!(msg, "items[0] total is out of range"),
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_total_rejects_overflowing_sum() {
        let result = order_total(&[item(1, 1, 1e308), item(2, 1, 1e308)]);
        assert!(matches!(result, Err(OrderError::Validation(_))));
    }

    /// Spaces encode as `%20`, not `+`; both decode the same in a query string.
    #[test]
    fn test_whatsapp_link_encodes_space_as_percent_20() {
        let url = whatsapp_link("628123", "Nama: Siti Aminah");
        assert_eq!(url, "https://wa.me/628123?text=Nama%3A%20Siti%20Aminah");
        assert!(!url.contains('+'));
    }

    #[test]
    fn test_message_layout() {
        let lines = vec![
            ("Kopi Susu".to_string(), item(1, 2, 10000.0)),
            ("Roti Bakar".to_string(), item(2, 1, 5000.0)),
        ];

        let msg = order_message(&order(25000.0, "tanpa gula"), &lines);

        assert_eq!(
            msg,
            "*Pesanan Baru #12*\n\n\
             Nama: Siti\n\
             Telepon: 08123\n\n\
             *Detail Pesanan:*\n\
             - Kopi Susu x2 = Rp 20000\n\
             - Roti Bakar x1 = Rp 5000\n\
             \n*Total: Rp 25000*\n\
             \nCatatan: tanpa gula"
        );
    }

    #[test]
    fn test_message_omits_empty_notes() {
        let msg = order_message(&order(3000.0, ""), &[]);
        assert!(msg.ends_with("*Total: Rp 3000*\n"));
        assert!(!msg.contains("Catatan"));
    }

    #[test]
    fn test_whatsapp_link_is_percent_encoded() {
        let url = whatsapp_link("628123456789", "*Total: Rp 5000*\nok");
        assert_eq!(
            url,
            "https://wa.me/628123456789?text=%2ATotal%3A%20Rp%205000%2A%0Aok"
        );
    }
}
