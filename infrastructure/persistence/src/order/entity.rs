use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use business::domain::order::model::{Order, OrderItem, OrderStatus, ShippingAddress};
use business::domain::shared::value_objects::{ProductId, UserId};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemEntity {
    pub product_id: String,
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddressEntity {
    pub name: String,
    pub address: String,
    pub city: String,
    pub zip: String,
}

/// Persisted order under the `shopwave-orders` key. `createdAt` is stored as
/// epoch milliseconds; `status` as its capitalized display form.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderEntity {
    pub id: String,
    pub user_id: String,
    pub items: Vec<OrderItemEntity>,
    pub total: Decimal,
    pub status: String,
    pub shipping_address: ShippingAddressEntity,
    pub created_at: i64,
}

impl OrderEntity {
    pub fn from_domain(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            user_id: order.user_id.as_str().to_string(),
            items: order
                .items
                .iter()
                .map(|item| OrderItemEntity {
                    product_id: item.product_id.as_str().to_string(),
                    name: item.name.clone(),
                    quantity: item.quantity,
                    price: item.price,
                })
                .collect(),
            total: order.total,
            status: order.status.to_string(),
            shipping_address: ShippingAddressEntity {
                name: order.shipping_address.name.clone(),
                address: order.shipping_address.address.clone(),
                city: order.shipping_address.city.clone(),
                zip: order.shipping_address.zip.clone(),
            },
            created_at: order.created_at.timestamp_millis(),
        }
    }

    pub fn into_domain(self) -> Order {
        Order::from_repository(
            self.id,
            UserId::new(self.user_id),
            self.items
                .into_iter()
                .map(|item| OrderItem {
                    product_id: ProductId::new(item.product_id),
                    name: item.name,
                    quantity: item.quantity,
                    price: item.price,
                })
                .collect(),
            self.total,
            self.status.parse().unwrap_or(OrderStatus::Pending),
            ShippingAddress {
                name: self.shipping_address.name,
                address: self.shipping_address.address,
                city: self.shipping_address.city,
                zip: self.shipping_address.zip,
            },
            DateTime::<Utc>::from_timestamp_millis(self.created_at).unwrap_or_default(),
        )
    }
}
