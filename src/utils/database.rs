use crate::modules::{dish::repository::Dish, order::repository::Order};
use serde::Deserialize;
use std::{path::Path, sync::Arc};
use tokio::sync::Mutex;

pub trait Entity: Clone {
    fn id(&self) -> &str;
}

/// Ordered in-memory collection. Insertion order is the listing order.
#[derive(Debug, Clone)]
pub struct Collection<E> {
    items: Vec<E>,
}

impl<E> Default for Collection<E> {
    fn default() -> Self {
        Self { items: vec![] }
    }
}

impl<E: Entity> Collection<E> {
    pub fn new(items: Vec<E>) -> Self {
        Self { items }
    }

    pub fn find(&self, id: &str) -> Option<&E> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn append(&mut self, item: E) {
        self.items.push(item);
    }

    /// Swaps the stored entity carrying the same id. Returns `false` when
    /// there was nothing to replace.
    pub fn replace(&mut self, item: E) -> bool {
        match self.items.iter_mut().find(|stored| stored.id() == item.id()) {
            Some(stored) => {
                *stored = item;
                true
            }
            None => false,
        }
    }

    pub fn remove_by_id(&mut self, id: &str) -> Option<E> {
        self.items
            .iter()
            .position(|item| item.id() == id)
            .map(|index| self.items.remove(index))
    }

    pub fn all(&self) -> &[E] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[derive(Clone, Default)]
pub struct Database {
    pub dishes: Arc<Mutex<Collection<Dish>>>,
    pub orders: Arc<Mutex<Collection<Order>>>,
}

#[derive(Deserialize, Default)]
pub struct Seed {
    #[serde(default)]
    pub dishes: Vec<Dish>,
    #[serde(default)]
    pub orders: Vec<Order>,
}

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

impl Database {
    pub fn new(seed: Seed) -> Self {
        Self {
            dishes: Arc::new(Mutex::new(Collection::new(seed.dishes))),
            orders: Arc::new(Mutex::new(Collection::new(seed.orders))),
        }
    }
}

pub async fn load_seed(path: &Path) -> Result<Seed, SeedError> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SeedError::Read {
            path: path.display().to_string(),
            source,
        })?;

    let seed: Seed = serde_json::from_str(&raw).map_err(|source| SeedError::Parse {
        path: path.display().to_string(),
        source,
    })?;

    tracing::info!(
        "Loaded {} dishes and {} orders from {}",
        seed.dishes.len(),
        seed.orders.len(),
        path.display()
    );

    Ok(seed)
}
