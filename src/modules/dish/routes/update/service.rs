use super::types::{request, response};
use crate::{
    modules::dish::{
        repository::{self, Dish},
        validation,
    },
    types::Context,
    utils::{
        database::Collection,
        guard,
        pipeline::{Exchange, Pipeline},
    },
};
use std::sync::Arc;

pub fn pipeline() -> Pipeline<Dish, response::Success> {
    Pipeline::new(|exchange: Exchange<Dish>, dishes: &mut Collection<Dish>| {
        let payload = exchange.decode::<repository::UpdateDishPayload>("Dish")?;
        let dish = exchange.into_found("Dish")?;

        Ok(response::Success::DishUpdated(repository::update(
            dishes, dish, payload,
        )))
    })
    .stage(guard::exists("Dish"))
    .stages(validation::stages())
    .stage(guard::route_id_matches_body("Dish"))
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut dishes = ctx.db.dishes.lock().await;

    pipeline().run(
        Exchange::new(Some(payload.id), payload.body.data),
        &mut dishes,
    )
}
