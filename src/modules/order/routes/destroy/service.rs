use super::types::{request, response};
use crate::{
    modules::order::{
        guards,
        repository::{self, Order},
    },
    types::Context,
    utils::{
        database::Collection,
        guard,
        pipeline::{Exchange, Pipeline},
    },
};
use std::sync::Arc;

pub fn pipeline() -> Pipeline<Order, response::Success> {
    Pipeline::new(|exchange: Exchange<Order>, orders: &mut Collection<Order>| {
        let order = exchange.into_found("Order")?;
        repository::delete_by_id(orders, &order.id);

        Ok(response::Success::OrderDeleted)
    })
    .stage(guard::exists("Order"))
    .stage(guards::deletable())
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut orders = ctx.db.orders.lock().await;

    pipeline().run(Exchange::new(Some(payload.id), Default::default()), &mut orders)
}
