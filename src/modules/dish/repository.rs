use crate::utils::{
    database::{Collection, Entity},
    id::IdSupplier,
};
use serde::{Deserialize, Serialize};
use serde_json::Number;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Dish {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: Number,
    pub image_url: String,
}

impl Entity for Dish {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct CreateDishPayload {
    pub name: String,
    pub description: String,
    pub price: Number,
    pub image_url: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct UpdateDishPayload {
    pub name: String,
    pub description: String,
    pub price: Number,
    pub image_url: String,
}

pub fn create(
    dishes: &mut Collection<Dish>,
    ids: &dyn IdSupplier,
    payload: CreateDishPayload,
) -> Dish {
    let dish = Dish {
        id: ids.next(),
        name: payload.name,
        description: payload.description,
        price: payload.price,
        image_url: payload.image_url,
    };

    dishes.append(dish.clone());
    tracing::debug!("Created dish {}", dish.id);

    dish
}

pub fn find_many(dishes: &Collection<Dish>) -> Vec<Dish> {
    dishes.all().to_vec()
}

/// Overwrites every mutable field; the id is kept from `dish`.
pub fn update(dishes: &mut Collection<Dish>, dish: Dish, payload: UpdateDishPayload) -> Dish {
    let updated = Dish {
        name: payload.name,
        description: payload.description,
        price: payload.price,
        image_url: payload.image_url,
        ..dish
    };

    if !dishes.replace(updated.clone()) {
        tracing::warn!("Dish {} vanished before it could be updated", updated.id);
    } else {
        tracing::debug!("Updated dish {}", updated.id);
    }

    updated
}
