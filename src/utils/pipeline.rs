//! Ordered stage chains that gate every operation.
//!
//! A [`Pipeline`] runs its stages in the order they were added. The first
//! stage returning an [`Error`] ends the run and that error is what the
//! caller sees. Only when every stage passes does the terminal handler run,
//! and it runs exactly once. Stages only read the collection; the handler is
//! the single place allowed to mutate it.

use super::{database::Collection, error::Error, validation::Data};
use serde::{de::DeserializeOwned, Deserialize};
use serde_json::Value;
use validator::ValidationError;

/// JSON request envelope: `{ "data": { ... } }`. A missing `data` is empty.
#[derive(Deserialize, Default, Debug, Clone)]
pub struct Body {
    #[serde(default)]
    pub data: Data,
}

/// Per-request state threaded through a pipeline.
#[derive(Debug, Clone)]
pub struct Exchange<E> {
    /// Id taken from the route, when the route carries one.
    pub id: Option<String>,
    /// The request's `data` payload.
    pub data: Data,
    /// Entity resolved by an existence guard.
    pub found: Option<E>,
}

impl<E> Exchange<E> {
    pub fn new(id: Option<String>, data: Data) -> Self {
        Self {
            id,
            data,
            found: None,
        }
    }

    pub fn route_id(&self) -> &str {
        self.id.as_deref().unwrap_or_default()
    }

    /// Hands back the entity an existence guard resolved.
    pub fn into_found(self, resource: &str) -> Result<E, Error> {
        let Self { id, found, .. } = self;

        found.ok_or_else(|| {
            Error::NotFound(format!(
                "{resource} does not exist: {}",
                id.unwrap_or_default()
            ))
        })
    }

    /// Reads the validated payload into a typed struct. A field can be
    /// truthy and still have the wrong JSON type, which is reported here.
    pub fn decode<T: DeserializeOwned>(&self, resource: &str) -> Result<T, Error> {
        serde_json::from_value(Value::Object(self.data.clone())).map_err(|err| {
            tracing::warn!("Failed to decode {resource} payload: {err}");
            Error::Validation(format!("{resource} payload is malformed: {err}"))
        })
    }
}

pub type Stage<E> =
    Box<dyn Fn(&mut Exchange<E>, &Collection<E>) -> Result<(), Error> + Send + Sync>;

pub type Handler<E, T> =
    Box<dyn Fn(Exchange<E>, &mut Collection<E>) -> Result<T, Error> + Send + Sync>;

pub struct Pipeline<E, T> {
    stages: Vec<Stage<E>>,
    handler: Handler<E, T>,
}

impl<E, T> Pipeline<E, T> {
    pub fn new<H>(handler: H) -> Self
    where
        H: Fn(Exchange<E>, &mut Collection<E>) -> Result<T, Error> + Send + Sync + 'static,
    {
        Self {
            stages: vec![],
            handler: Box::new(handler),
        }
    }

    pub fn stage(mut self, stage: Stage<E>) -> Self {
        self.stages.push(stage);
        self
    }

    pub fn stages(mut self, stages: impl IntoIterator<Item = Stage<E>>) -> Self {
        self.stages.extend(stages);
        self
    }

    pub fn run(
        &self,
        mut exchange: Exchange<E>,
        collection: &mut Collection<E>,
    ) -> Result<T, Error> {
        for (index, stage) in self.stages.iter().enumerate() {
            if let Err(err) = stage(&mut exchange, collection) {
                tracing::warn!("Request rejected at stage {index}: {err}");
                return Err(err);
            }
        }

        tracing::debug!("All {} stages passed, running handler", self.stages.len());
        (self.handler)(exchange, collection)
    }
}

/// Lifts a payload validator into a stage.
pub fn validate<E, F>(validator: F) -> Stage<E>
where
    E: 'static,
    F: Fn(&Data) -> Result<(), ValidationError> + Send + Sync + 'static,
{
    Box::new(move |exchange: &mut Exchange<E>, _: &Collection<E>| {
        validator(&exchange.data).map_err(Error::from)
    })
}
