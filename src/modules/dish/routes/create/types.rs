pub mod request {
    pub use crate::utils::pipeline::Body;

    pub struct Payload {
        pub body: Body,
    }
}

pub mod response {
    use crate::modules::dish::repository::Dish;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub use crate::utils::error::Error;

    #[derive(Debug)]
    pub enum Success {
        DishCreated(Dish),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::DishCreated(dish) => {
                    (StatusCode::CREATED, Json(json!({ "data": dish }))).into_response()
                }
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
