use super::types::{request, response};
use crate::{
    modules::order::{
        guards,
        repository::{self, Order},
        validation,
    },
    types::Context,
    utils::{
        database::Collection,
        guard,
        pipeline::{validate, Exchange, Pipeline},
        validation::validate_has,
    },
};
use std::sync::Arc;

pub fn pipeline() -> Pipeline<Order, response::Success> {
    Pipeline::new(|exchange: Exchange<Order>, orders: &mut Collection<Order>| {
        let payload = exchange.decode::<repository::UpdateOrderPayload>("Order")?;
        let order = exchange.into_found("Order")?;

        Ok(response::Success::OrderUpdated(repository::update(
            orders, order, payload,
        )))
    })
    .stage(guard::exists("Order"))
    .stages(validation::stages())
    .stage(guard::route_id_matches_body("Order"))
    .stage(validate(|data| validate_has(data, "Order", "status")))
    .stage(guards::status_transition_valid())
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut orders = ctx.db.orders.lock().await;

    pipeline().run(
        Exchange::new(Some(payload.id), payload.body.data),
        &mut orders,
    )
}
