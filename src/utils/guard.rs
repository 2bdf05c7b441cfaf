use super::{
    database::{Collection, Entity},
    error::Error,
    pipeline::{Exchange, Stage},
    validation::is_truthy,
};
use serde_json::Value;

/// Resolves the route id against the collection and keeps the entity on the
/// exchange for later stages.
pub fn exists<E>(resource: &'static str) -> Stage<E>
where
    E: Entity + 'static,
{
    Box::new(move |exchange: &mut Exchange<E>, collection: &Collection<E>| {
        let id = exchange.route_id().to_string();

        match collection.find(&id) {
            Some(entity) => {
                exchange.found = Some(entity.clone());
                Ok(())
            }
            None => Err(Error::NotFound(format!("{resource} does not exist: {id}"))),
        }
    })
}

/// A body `id` is optional, but when present it has to agree with the route.
pub fn route_id_matches_body<E>(resource: &'static str) -> Stage<E>
where
    E: 'static,
{
    Box::new(move |exchange: &mut Exchange<E>, _: &Collection<E>| {
        let route_id = exchange.route_id();

        match exchange.data.get("id") {
            None => Ok(()),
            Some(body_id) if !is_truthy(body_id) => Ok(()),
            Some(Value::String(body_id)) if body_id == route_id => Ok(()),
            Some(body_id) => {
                let body_id = match body_id {
                    Value::String(text) => text.clone(),
                    other => other.to_string(),
                };

                Err(Error::Validation(format!(
                    "{resource} id does not match route id. {resource}: {body_id}, Route: {route_id}"
                )))
            }
        }
    })
}
