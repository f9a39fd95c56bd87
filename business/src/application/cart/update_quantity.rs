use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::update_quantity::{
    UpdateCartQuantityParams, UpdateCartQuantityUseCase,
};
use crate::domain::logger::Logger;

pub struct UpdateCartQuantityUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCartQuantityUseCase for UpdateCartQuantityUseCaseImpl {
    async fn execute(&self, params: UpdateCartQuantityParams) -> Result<Vec<CartItem>, CartError> {
        let mut cart = Cart::from_items(self.repository.load().await?);
        cart.update_quantity(&params.product_id, params.quantity);

        if self.repository.save(cart.items()).await.is_err() {
            self.logger.warn(&format!(
                "Failed to persist cart after updating {}",
                params.product_id
            ));
        }

        Ok(cart.into_items())
    }
}
