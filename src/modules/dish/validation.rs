use super::repository::Dish;
use crate::utils::{
    pipeline::{validate, Stage},
    validation::{validate_has, validate_positive_number},
};

/// Field checks shared by create and update, in declaration order.
pub fn stages() -> Vec<Stage<Dish>> {
    vec![
        validate(|data| validate_has(data, "Dish", "name")),
        validate(|data| validate_has(data, "Dish", "description")),
        validate(|data| validate_has(data, "Dish", "price")),
        validate(|data| validate_positive_number(data, "Dish", "price")),
        validate(|data| validate_has(data, "Dish", "image_url")),
    ]
}
