pub mod dish;
pub mod order;

use crate::types::Context;
use axum::{
    extract::{Json, OriginalUri},
    http::{Method, StatusCode, Uri},
    response::IntoResponse,
    Router,
};
use serde_json::json;
use std::sync::Arc;

async fn not_found(uri: Uri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": format!("Path not found: {}", uri.path()) })),
    )
}

/// JSON 405 for methods a resource route does not register.
pub(crate) async fn method_not_allowed(
    method: Method,
    OriginalUri(uri): OriginalUri,
) -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(json!({ "error": format!("Method {method} not allowed for {}", uri.path()) })),
    )
}

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/dishes", dish::get_router())
        .nest("/orders", order::get_router())
        .fallback(not_found)
}
