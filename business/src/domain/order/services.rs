use async_trait::async_trait;

use super::errors::CheckoutError;
use super::model::{Order, PlaceOrderRequest};

/// Service port for the order backend. The gateway assembles and returns the
/// order; it does NOT persist it: order persistence stays a client-owned
/// responsibility until a real backend exists.
#[async_trait]
pub trait OrderGateway: Send + Sync {
    async fn place(&self, request: PlaceOrderRequest) -> Result<Order, CheckoutError>;
}
