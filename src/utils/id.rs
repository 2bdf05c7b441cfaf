use std::sync::Mutex;
use ulid::{Generator, Ulid};

pub trait IdSupplier: Send + Sync {
    fn next(&self) -> String;
}

/// Hands out monotonically increasing ULIDs for the lifetime of the process.
pub struct UlidSupplier {
    generator: Mutex<Generator>,
}

impl Default for UlidSupplier {
    fn default() -> Self {
        Self {
            generator: Mutex::new(Generator::new()),
        }
    }
}

impl IdSupplier for UlidSupplier {
    fn next(&self) -> String {
        let generated = match self.generator.lock() {
            Ok(mut generator) => generator.generate().ok(),
            Err(_) => None,
        };

        generated
            .unwrap_or_else(|| {
                tracing::warn!("Monotonic id generator unavailable, falling back to a random ulid");
                Ulid::new()
            })
            .to_string()
    }
}
