use super::types::response;
use crate::{
    modules::dish::repository::{self, Dish},
    types::Context,
    utils::{
        database::Collection,
        pipeline::{Exchange, Pipeline},
    },
};
use std::sync::Arc;

pub fn pipeline() -> Pipeline<Dish, response::Success> {
    Pipeline::new(|_: Exchange<Dish>, dishes: &mut Collection<Dish>| {
        Ok(response::Success::Dishes(repository::find_many(dishes)))
    })
}

pub async fn service(ctx: Arc<Context>) -> response::Response {
    let mut dishes = ctx.db.dishes.lock().await;

    pipeline().run(Exchange::new(None, Default::default()), &mut dishes)
}
