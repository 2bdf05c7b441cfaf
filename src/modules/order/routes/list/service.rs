use super::types::response;
use crate::{
    modules::order::repository::{self, Order},
    types::Context,
    utils::{
        database::Collection,
        pipeline::{Exchange, Pipeline},
    },
};
use std::sync::Arc;

pub fn pipeline() -> Pipeline<Order, response::Success> {
    Pipeline::new(|_: Exchange<Order>, orders: &mut Collection<Order>| {
        Ok(response::Success::Orders(repository::find_many(orders)))
    })
}

pub async fn service(ctx: Arc<Context>) -> response::Response {
    let mut orders = ctx.db.orders.lock().await;

    pipeline().run(Exchange::new(None, Default::default()), &mut orders)
}
