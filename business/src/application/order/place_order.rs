use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::order::errors::CheckoutError;
use crate::domain::order::model::{Order, PlaceOrderRequest};
use crate::domain::order::services::OrderGateway;
use crate::domain::order::use_cases::place_order::{PlaceOrderParams, PlaceOrderUseCase};

pub struct PlaceOrderUseCaseImpl {
    pub gateway: Arc<dyn OrderGateway>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl PlaceOrderUseCase for PlaceOrderUseCaseImpl {
    async fn execute(&self, params: PlaceOrderParams) -> Result<Order, CheckoutError> {
        if params.items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        self.logger
            .info(&format!("Placing order for user: {}", params.user_id));

        let order = self
            .gateway
            .place(PlaceOrderRequest {
                user_id: params.user_id,
                items: params.items,
                shipping_address: params.shipping_address,
            })
            .await?;

        self.logger
            .info(&format!("Order {} placed, total {}", order.id, order.total));

        Ok(order)
    }
}
