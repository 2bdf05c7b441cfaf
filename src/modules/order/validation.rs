use super::repository::Order;
use crate::utils::{
    pipeline::{validate, Stage},
    validation::{validate_has, validate_order_dishes},
};

/// Field checks shared by create and update, in declaration order.
pub fn stages() -> Vec<Stage<Order>> {
    vec![
        validate(|data| validate_has(data, "Order", "deliverTo")),
        validate(|data| validate_has(data, "Order", "mobileNumber")),
        validate(|data| validate_has(data, "Order", "dishes")),
        validate(validate_order_dishes),
    ]
}
