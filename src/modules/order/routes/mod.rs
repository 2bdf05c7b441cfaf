pub mod create;
pub mod destroy;
pub mod list;
pub mod read;
pub mod update;

use crate::{modules::method_not_allowed, types::Context};
use axum::routing::{get, post, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route(
            "/",
            post(create::handler)
                .get(list::handler)
                .fallback(method_not_allowed),
        )
        .route(
            "/:order_id",
            get(read::handler)
                .put(update::handler)
                .delete(destroy::handler)
                .fallback(method_not_allowed),
        )
}
