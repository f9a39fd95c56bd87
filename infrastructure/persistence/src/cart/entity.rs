use serde::{Deserialize, Serialize};

use business::domain::cart::model::CartItem;
use business::domain::shared::value_objects::ProductId;

/// Persisted cart line, JSON-shaped as `{"productId", "quantity"}`.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItemEntity {
    pub product_id: String,
    pub quantity: u32,
}

impl CartItemEntity {
    pub fn from_domain(item: &CartItem) -> Self {
        Self {
            product_id: item.product_id.as_str().to_string(),
            quantity: item.quantity,
        }
    }

    pub fn into_domain(self) -> CartItem {
        CartItem {
            product_id: ProductId::new(self.product_id),
            quantity: self.quantity,
        }
    }
}
