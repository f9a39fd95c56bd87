use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::{Cart, CartItem};
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::logger::Logger;
use crate::domain::notifier::Notifier;

pub struct RemoveCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<Vec<CartItem>, CartError> {
        let mut cart = Cart::from_items(self.repository.load().await?);
        cart.remove(&params.product_id);

        if self.repository.save(cart.items()).await.is_err() {
            self.logger.warn(&format!(
                "Failed to persist cart after removing {}",
                params.product_id
            ));
        }

        self.notifier
            .toast("Item removed", "The item has been removed from your cart.");

        Ok(cart.into_items())
    }
}
