use crate::utils::{
    database::{Collection, Entity},
    id::IdSupplier,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::{fmt, str::FromStr};

#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Preparing,
    OutForDelivery,
    Delivered,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Preparing,
        OrderStatus::OutForDelivery,
        OrderStatus::Delivered,
    ];

    /// `delivered` has no outbound transition.
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Delivered)
    }

    pub fn is_deletable(&self) -> bool {
        matches!(self, OrderStatus::Pending)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Preparing => "preparing",
            OrderStatus::OutForDelivery => "out-for-delivery",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OrderStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Unknown order status: {s}"))
    }
}

/// A line item. Anything besides `quantity`, `dishId` included, is kept as sent.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct OrderDish {
    pub quantity: Number,
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderDish>,
}

impl Entity for Order {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderPayload {
    pub deliver_to: String,
    pub mobile_number: String,
    #[serde(default)]
    pub status: OrderStatus,
    pub dishes: Vec<OrderDish>,
}

#[derive(Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderPayload {
    pub deliver_to: String,
    pub mobile_number: String,
    pub status: OrderStatus,
    pub dishes: Vec<OrderDish>,
}

pub fn create(
    orders: &mut Collection<Order>,
    ids: &dyn IdSupplier,
    payload: CreateOrderPayload,
) -> Order {
    let order = Order {
        id: ids.next(),
        deliver_to: payload.deliver_to,
        mobile_number: payload.mobile_number,
        status: payload.status,
        dishes: payload.dishes,
    };

    orders.append(order.clone());
    tracing::debug!("Created order {} with status {}", order.id, order.status);

    order
}

pub fn find_many(orders: &Collection<Order>) -> Vec<Order> {
    orders.all().to_vec()
}

pub fn update(orders: &mut Collection<Order>, order: Order, payload: UpdateOrderPayload) -> Order {
    let previous_status = order.status;
    let updated = Order {
        deliver_to: payload.deliver_to,
        mobile_number: payload.mobile_number,
        status: payload.status,
        dishes: payload.dishes,
        ..order
    };

    if !orders.replace(updated.clone()) {
        tracing::warn!("Order {} vanished before it could be updated", updated.id);
    } else {
        tracing::debug!(
            "Updated order {} ({} -> {})",
            updated.id,
            previous_status,
            updated.status
        );
    }

    updated
}

pub fn delete_by_id(orders: &mut Collection<Order>, id: &str) -> Option<Order> {
    let removed = orders.remove_by_id(id);

    match &removed {
        Some(order) => tracing::debug!("Deleted order {}", order.id),
        None => tracing::warn!("Tried to delete missing order {id}"),
    }

    removed
}
