use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;
use rand::distr::Alphanumeric;

use business::domain::order::errors::CheckoutError;
use business::domain::order::model::{Order, PlaceOrderRequest};
use business::domain::order::services::OrderGateway;

const ORDER_ID_LENGTH: usize = 6;

/// Stand-in for a real order backend. Sleeps to simulate the network,
/// fabricates a short order id, and assembles the order. It cannot fail;
/// a real gateway replacing it reports the `CheckoutError` kinds instead.
pub struct MockOrderGateway {
    delay: Duration,
}

impl MockOrderGateway {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    fn fabricate_order_id() -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(ORDER_ID_LENGTH)
            .map(|c| (c as char).to_ascii_lowercase())
            .collect()
    }
}

#[async_trait]
impl OrderGateway for MockOrderGateway {
    async fn place(&self, request: PlaceOrderRequest) -> Result<Order, CheckoutError> {
        tokio::time::sleep(self.delay).await;

        Order::new(
            Self::fabricate_order_id(),
            request.user_id,
            request.items,
            request.shipping_address,
        )
        .map_err(|_| CheckoutError::EmptyCart)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use business::domain::order::model::{OrderItem, OrderStatus, ShippingAddress};
    use business::domain::shared::value_objects::{ProductId, UserId};
    use rust_decimal::Decimal;

    fn request() -> PlaceOrderRequest {
        PlaceOrderRequest {
            user_id: UserId::new("u1"),
            items: vec![
                OrderItem {
                    product_id: ProductId::new("prod_001"),
                    name: "Quantum-Core Laptop".to_string(),
                    quantity: 1,
                    price: Decimal::new(149999, 2),
                },
                OrderItem {
                    product_id: ProductId::new("prod_002"),
                    name: "SonicStream Headphones".to_string(),
                    quantity: 2,
                    price: Decimal::new(24999, 2),
                },
            ],
            shipping_address: ShippingAddress {
                name: "John Doe".to_string(),
                address: "1 Main St".to_string(),
                city: "Springfield".to_string(),
                zip: "12345".to_string(),
            },
        }
    }

    #[tokio::test]
    async fn should_assemble_pending_order_with_computed_total() {
        let gateway = MockOrderGateway::new(Duration::ZERO);
        let order = gateway.place(request()).await.unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total, Decimal::new(199997, 2));
        assert_eq!(order.items.len(), 2);
    }

    #[tokio::test]
    async fn should_fabricate_short_lowercase_order_id() {
        let gateway = MockOrderGateway::new(Duration::ZERO);
        let order = gateway.place(request()).await.unwrap();

        assert_eq!(order.id.len(), 6);
        assert!(order.id.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit()));
    }

    #[tokio::test]
    async fn should_snapshot_items_from_request() {
        let gateway = MockOrderGateway::new(Duration::ZERO);
        let order = gateway.place(request()).await.unwrap();

        assert_eq!(order.items[0].name, "Quantum-Core Laptop");
        assert_eq!(order.items[0].price, Decimal::new(149999, 2));
    }
}
