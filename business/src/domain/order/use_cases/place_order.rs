use async_trait::async_trait;

use crate::domain::order::errors::CheckoutError;
use crate::domain::order::model::{Order, OrderItem, ShippingAddress};
use crate::domain::shared::value_objects::UserId;

pub struct PlaceOrderParams {
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub shipping_address: ShippingAddress,
}

/// Places an order through the gateway and returns it. The caller is
/// responsible for appending the returned order to the session store and for
/// clearing the cart.
#[async_trait]
pub trait PlaceOrderUseCase: Send + Sync {
    async fn execute(&self, params: PlaceOrderParams) -> Result<Order, CheckoutError>;
}
