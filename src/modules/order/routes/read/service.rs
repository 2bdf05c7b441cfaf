use super::types::{request, response};
use crate::{
    modules::order::repository::Order,
    types::Context,
    utils::{
        database::Collection,
        guard,
        pipeline::{Exchange, Pipeline},
    },
};
use std::sync::Arc;

pub fn pipeline() -> Pipeline<Order, response::Success> {
    Pipeline::new(|exchange: Exchange<Order>, _: &mut Collection<Order>| {
        exchange.into_found("Order").map(response::Success::Order)
    })
    .stage(guard::exists("Order"))
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut orders = ctx.db.orders.lock().await;

    pipeline().run(Exchange::new(Some(payload.id), Default::default()), &mut orders)
}
