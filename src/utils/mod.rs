pub mod database;
pub mod error;
pub mod guard;
pub mod id;
pub mod pipeline;
pub mod validation;
