mod common;

use axum::http::{Method, StatusCode};
use common::{taco, with, without, TestApp};
use serde_json::json;

#[tokio::test]
async fn create_dish() {
    let app = TestApp::new();

    let (status, body) = app.post("/dishes", taco()).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["price"], json!(5));
    assert_eq!(body["data"]["name"], json!("Taco"));
    assert!(body["data"]["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(app.dishes().await.len(), 1);
}

#[tokio::test]
async fn create_dish_assigns_unique_ids() {
    let app = TestApp::new();

    let (_, first) = app.post("/dishes", taco()).await;
    let (_, second) = app.post("/dishes", with(taco(), "name", json!("Burrito"))).await;

    assert_ne!(first["data"]["id"], second["data"]["id"]);
    assert_eq!(app.dishes().await.len(), 2);
}

#[tokio::test]
async fn create_dish_ignores_a_client_supplied_id() {
    let app = TestApp::new();

    let (status, body) = app.post("/dishes", with(taco(), "id", json!("mine"))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(body["data"]["id"], json!("mine"));
}

#[tokio::test]
async fn create_dish_rejects_missing_fields() {
    let app = TestApp::new();

    for field in ["name", "description", "price", "image_url"] {
        let (status, body) = app.post("/dishes", without(taco(), field)).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{field}");
        assert_eq!(body["error"], json!(format!("Dish must include a {field}")));
    }

    for field in ["name", "description", "image_url"] {
        let (status, _) = app.post("/dishes", with(taco(), field, json!(""))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{field}");
    }

    assert!(app.dishes().await.is_empty());
}

#[tokio::test]
async fn create_dish_reports_the_first_offending_field() {
    let app = TestApp::new();

    let (status, body) = app.post("/dishes", json!({ "price": -1 })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Dish must include a name"));
}

#[tokio::test]
async fn create_dish_without_data_is_rejected() {
    let app = TestApp::new();

    let (status, body) = app.send(Method::POST, "/dishes", Some(json!({}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Dish must include a name"));
}

#[tokio::test]
async fn create_dish_rejects_invalid_prices() {
    let app = TestApp::new();

    let (status, body) = app.post("/dishes", with(taco(), "price", json!(0))).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Dish must include a price"));

    for price in [json!(-1), json!(-0.5), json!("17"), json!([5])] {
        let (status, body) = app.post("/dishes", with(taco(), "price", price.clone())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "{price}");
        assert_eq!(
            body["error"],
            json!("Dish must have a price that is an integer greater than 0")
        );
    }

    assert!(app.dishes().await.is_empty());
}

#[tokio::test]
async fn create_dish_accepts_fractional_prices() {
    let app = TestApp::new();

    let (status, body) = app.post("/dishes", with(taco(), "price", json!(4.5))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["price"], json!(4.5));
}

#[tokio::test]
async fn create_dish_with_wrongly_typed_field_mutates_nothing() {
    let app = TestApp::new();

    let (status, body) = app.post("/dishes", with(taco(), "name", json!(42))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .is_some_and(|message| message.starts_with("Dish payload is malformed")));
    assert!(app.dishes().await.is_empty());
}

#[tokio::test]
async fn list_dishes_in_insertion_order() {
    let app = TestApp::new();

    for name in ["Taco", "Burrito", "Quesadilla"] {
        app.post("/dishes", with(taco(), "name", json!(name))).await;
    }

    let (status, body) = app.get("/dishes").await;
    let names: Vec<_> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|dish| dish["name"].clone())
        .collect();

    assert_eq!(status, StatusCode::OK);
    assert_eq!(names, vec![json!("Taco"), json!("Burrito"), json!("Quesadilla")]);
}

#[tokio::test]
async fn read_dish() {
    let app = TestApp::new();
    let (_, created) = app.post("/dishes", taco()).await;
    let id = created["data"]["id"].as_str().unwrap();

    let (status, body) = app.get(&format!("/dishes/{id}")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], created["data"]);
}

#[tokio::test]
async fn read_missing_dish() {
    let app = TestApp::new();

    let (status, body) = app.get("/dishes/nope").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Dish does not exist: nope"));
}

#[tokio::test]
async fn update_dish() {
    let app = TestApp::new();
    let (_, created) = app.post("/dishes", taco()).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let data = json!({
        "id": id,
        "name": "Fish Taco",
        "description": "grilled",
        "price": 7,
        "image_url": "v"
    });
    let (status, body) = app.put(&format!("/dishes/{id}"), data).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], json!(id));
    assert_eq!(body["data"]["name"], json!("Fish Taco"));

    let (_, stored) = app.get(&format!("/dishes/{id}")).await;
    assert_eq!(stored["data"], body["data"]);
}

#[tokio::test]
async fn update_dish_without_body_id_uses_the_route() {
    let app = TestApp::new();
    let (_, created) = app.post("/dishes", taco()).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .put(&format!("/dishes/{id}"), with(taco(), "price", json!(9)))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], json!(id));
    assert_eq!(body["data"]["price"], json!(9));
}

#[tokio::test]
async fn update_dish_with_mismatching_id_leaves_it_unchanged() {
    let app = TestApp::new();
    let (_, created) = app.post("/dishes", taco()).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let data = with(with(taco(), "id", json!("other")), "name", json!("Changed"));
    let (status, body) = app.put(&format!("/dishes/{id}"), data).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!(format!(
            "Dish id does not match route id. Dish: other, Route: {id}"
        ))
    );

    let (_, stored) = app.get(&format!("/dishes/{id}")).await;
    assert_eq!(stored["data"], created["data"]);
}

#[tokio::test]
async fn update_dish_validates_fields() {
    let app = TestApp::new();
    let (_, created) = app.post("/dishes", taco()).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = app
        .put(&format!("/dishes/{id}"), with(taco(), "price", json!("free")))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!("Dish must have a price that is an integer greater than 0")
    );
}

#[tokio::test]
async fn update_missing_dish_is_not_found_before_validation() {
    let app = TestApp::new();

    let (status, body) = app.put("/dishes/nope", json!({})).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Dish does not exist: nope"));
}

#[tokio::test]
async fn dishes_cannot_be_deleted() {
    let app = TestApp::new();
    let (_, created) = app.post("/dishes", taco()).await;
    let id = created["data"]["id"].as_str().unwrap().to_string();

    let (status, body) = app.delete(&format!("/dishes/{id}")).await;

    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(
        body["error"],
        json!(format!("Method DELETE not allowed for /dishes/{id}"))
    );
    assert_eq!(app.dishes().await.len(), 1);
}

#[tokio::test]
async fn unknown_paths_are_not_found() {
    let app = TestApp::new();

    let (status, body) = app.get("/drinks").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Path not found: /drinks"));
}
