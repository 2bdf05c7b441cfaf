use super::types::{request, response};
use crate::{
    modules::dish::{
        repository::{self, Dish},
        validation,
    },
    types::Context,
    utils::{
        database::Collection,
        id::IdSupplier,
        pipeline::{Exchange, Pipeline},
    },
};
use std::sync::Arc;

pub fn pipeline(ids: Arc<dyn IdSupplier>) -> Pipeline<Dish, response::Success> {
    Pipeline::new(
        move |exchange: Exchange<Dish>, dishes: &mut Collection<Dish>| {
            let payload = exchange.decode::<repository::CreateDishPayload>("Dish")?;

            Ok(response::Success::DishCreated(repository::create(
                dishes,
                ids.as_ref(),
                payload,
            )))
        },
    )
    .stages(validation::stages())
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut dishes = ctx.db.dishes.lock().await;

    pipeline(ctx.ids.clone()).run(Exchange::new(None, payload.body.data), &mut dishes)
}
