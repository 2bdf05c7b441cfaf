pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use crate::modules::dish::repository::Dish;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub use crate::utils::error::Error;

    #[derive(Debug)]
    pub enum Success {
        Dish(Dish),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Dish(dish) => (StatusCode::OK, Json(json!({ "data": dish }))).into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
