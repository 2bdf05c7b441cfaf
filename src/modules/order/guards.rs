use super::repository::{Order, OrderStatus};
use crate::utils::{
    database::Collection,
    error::Error,
    pipeline::{Exchange, Stage},
};
use serde_json::Value;

fn current_status(exchange: &Exchange<Order>) -> Result<OrderStatus, Error> {
    exchange
        .found
        .as_ref()
        .map(|order| order.status)
        .ok_or_else(|| Error::NotFound(format!("Order does not exist: {}", exchange.route_id())))
}

/// A delivered order is locked, and any other order may only move to one of
/// the known statuses.
pub fn status_transition_valid() -> Stage<Order> {
    Box::new(|exchange: &mut Exchange<Order>, _: &Collection<Order>| {
        if current_status(exchange)?.is_terminal() {
            return Err(Error::Validation(String::from(
                "A delivered order cannot be changed",
            )));
        }

        match exchange
            .data
            .get("status")
            .and_then(Value::as_str)
            .map(str::parse::<OrderStatus>)
        {
            Some(Ok(_)) => Ok(()),
            _ => Err(Error::Validation(format!(
                "Order must have a status of {}",
                OrderStatus::ALL.map(|status| status.as_str()).join(", ")
            ))),
        }
    })
}

pub fn deletable() -> Stage<Order> {
    Box::new(|exchange: &mut Exchange<Order>, _: &Collection<Order>| {
        match current_status(exchange)?.is_deletable() {
            true => Ok(()),
            false => Err(Error::Validation(String::from(
                "An order cannot be deleted unless it is pending",
            ))),
        }
    })
}
