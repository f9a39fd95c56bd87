use poem_openapi::Object;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use business::domain::cart::model::CartItem;

use crate::api::catalog::dto::ProductResponse;

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct AddCartItemRequest {
    pub product_id: String,
    /// Amount to add; defaults to 1
    pub quantity: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct UpdateCartQuantityRequest {
    /// Exact new quantity; 0 removes the line
    pub quantity: u32,
}

/// A raw cart line as persisted.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CartItemResponse {
    pub product_id: String,
    pub quantity: u32,
}

impl From<CartItem> for CartItemResponse {
    fn from(item: CartItem) -> Self {
        Self {
            product_id: item.product_id.as_str().to_string(),
            quantity: item.quantity,
        }
    }
}

/// A cart line resolved against the catalog for display.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CartLineResponse {
    pub product: ProductResponse,
    pub quantity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CartResponse {
    pub items: Vec<CartLineResponse>,
    /// Sum of price × quantity over the resolved lines
    pub subtotal: Decimal,
}
