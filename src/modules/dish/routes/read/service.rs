use super::types::{request, response};
use crate::{
    modules::dish::repository::Dish,
    types::Context,
    utils::{
        database::Collection,
        guard,
        pipeline::{Exchange, Pipeline},
    },
};
use std::sync::Arc;

pub fn pipeline() -> Pipeline<Dish, response::Success> {
    Pipeline::new(|exchange: Exchange<Dish>, _: &mut Collection<Dish>| {
        exchange.into_found("Dish").map(response::Success::Dish)
    })
    .stage(guard::exists("Dish"))
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut dishes = ctx.db.dishes.lock().await;

    pipeline().run(Exchange::new(Some(payload.id), Default::default()), &mut dishes)
}
