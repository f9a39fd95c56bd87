use chrono::{DateTime, Utc};
use poem_openapi::Object;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use business::domain::order::model::{Order, OrderItem, ShippingAddress};

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CheckoutRequest {
    /// Recipient full name
    pub name: String,
    pub address: String,
    pub city: String,
    pub zip: String,
}

impl CheckoutRequest {
    pub fn into_shipping_address(self) -> ShippingAddress {
        ShippingAddress {
            name: self.name,
            address: self.address,
            city: self.city,
            zip: self.zip,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct OrderItemResponse {
    pub product_id: String,
    /// Product name at purchase time
    pub name: String,
    pub quantity: u32,
    /// Unit price at purchase time
    pub price: Decimal,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            product_id: item.product_id.as_str().to_string(),
            name: item.name,
            quantity: item.quantity,
            price: item.price,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct ShippingAddressResponse {
    pub name: String,
    pub address: String,
    pub city: String,
    pub zip: String,
}

impl From<ShippingAddress> for ShippingAddressResponse {
    fn from(address: ShippingAddress) -> Self {
        Self {
            name: address.name,
            address: address.address,
            city: address.city,
            zip: address.zip,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct OrderResponse {
    pub id: String,
    pub user_id: String,
    pub items: Vec<OrderItemResponse>,
    /// Sum of price × quantity over the snapshot items
    pub total: Decimal,
    /// Pending, Shipped, Delivered, or Cancelled
    pub status: String,
    pub shipping_address: ShippingAddressResponse,
    pub created_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            user_id: order.user_id.as_str().to_string(),
            items: order.items.into_iter().map(Into::into).collect(),
            total: order.total,
            status: order.status.to_string(),
            shipping_address: order.shipping_address.into(),
            created_at: order.created_at,
        }
    }
}
