use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use super::errors::OrderError;
use crate::domain::shared::value_objects::{ProductId, UserId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderStatus {
    Pending,
    Shipped,
    Delivered,
    Cancelled,
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Pending => write!(f, "Pending"),
            OrderStatus::Shipped => write!(f, "Shipped"),
            OrderStatus::Delivered => write!(f, "Delivered"),
            OrderStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

impl std::str::FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending" => Ok(OrderStatus::Pending),
            "Shipped" => Ok(OrderStatus::Shipped),
            "Delivered" => Ok(OrderStatus::Delivered),
            "Cancelled" => Ok(OrderStatus::Cancelled),
            _ => Err(format!("Invalid order status: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShippingAddress {
    pub name: String,
    pub address: String,
    pub city: String,
    pub zip: String,
}

/// An order line: a snapshot of product name and price at purchase time,
/// intentionally decoupled from later catalog edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub name: String,
    pub quantity: u32,
    pub price: Decimal,
}

/// A placed order. `total` always equals the sum of line subtotals at
/// creation time; `Order::new` is the only computation site.
#[derive(Debug, Clone)]
pub struct Order {
    pub id: String,
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub total: Decimal,
    pub status: OrderStatus,
    pub shipping_address: ShippingAddress,
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(
        id: String,
        user_id: UserId,
        items: Vec<OrderItem>,
        shipping_address: ShippingAddress,
    ) -> Result<Self, OrderError> {
        if items.is_empty() {
            return Err(OrderError::ItemsEmpty);
        }

        let total = Self::total_of(&items);

        Ok(Self {
            id,
            user_id,
            items,
            total,
            status: OrderStatus::Pending,
            shipping_address,
            created_at: Utc::now(),
        })
    }

    /// Sum of price × quantity over the given lines. Display subtotals and
    /// the stored order total both come from here, so they always agree.
    pub fn total_of(items: &[OrderItem]) -> Decimal {
        items
            .iter()
            .map(|item| item.price * Decimal::from(item.quantity))
            .sum()
    }

    /// Constructor for data already persisted in the session store
    /// (no validation, no recompute).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: String,
        user_id: UserId,
        items: Vec<OrderItem>,
        total: Decimal,
        status: OrderStatus,
        shipping_address: ShippingAddress,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            items,
            total,
            status,
            shipping_address,
            created_at,
        }
    }
}

/// Payload handed to the order gateway: the caller's user snapshot, resolved
/// cart lines, and shipping details.
#[derive(Debug, Clone)]
pub struct PlaceOrderRequest {
    pub user_id: UserId,
    pub items: Vec<OrderItem>,
    pub shipping_address: ShippingAddress,
}
