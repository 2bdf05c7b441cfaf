use super::types::{request, response};
use crate::{
    modules::order::{
        repository::{self, Order},
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

pub fn pipeline(ids: Arc<dyn IdSupplier>) -> Pipeline<Order, response::Success> {
    Pipeline::new(
        move |exchange: Exchange<Order>, orders: &mut Collection<Order>| {
            let payload = exchange.decode::<repository::CreateOrderPayload>("Order")?;

            Ok(response::Success::OrderCreated(repository::create(
                orders,
                ids.as_ref(),
                payload,
            )))
        },
    )
    .stages(validation::stages())
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut orders = ctx.db.orders.lock().await;

    pipeline(ctx.ids.clone()).run(Exchange::new(None, payload.body.data), &mut orders)
}
