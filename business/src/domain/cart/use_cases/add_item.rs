use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;
use crate::domain::shared::value_objects::ProductId;

pub struct AddCartItemParams {
    pub product_id: ProductId,
    /// Amount to add; callers that omit a quantity pass 1.
    pub quantity: u32,
}

#[async_trait]
pub trait AddCartItemUseCase: Send + Sync {
    async fn execute(&self, params: AddCartItemParams) -> Result<Vec<CartItem>, CartError>;
}
