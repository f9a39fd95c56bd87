use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartItem;

#[async_trait]
pub trait GetCartItemsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<CartItem>, CartError>;
}
