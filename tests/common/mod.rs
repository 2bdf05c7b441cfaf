#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use grubdash_backend_rs::{
    app,
    modules::{
        dish::repository::Dish,
        order::repository::{Order, OrderStatus},
    },
    types::{AppContext, AppEnvironment, Context},
};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

pub struct TestApp {
    pub ctx: Arc<Context>,
    router: Router,
}

impl TestApp {
    pub fn new() -> Self {
        let ctx = Arc::new(Context::in_memory(AppContext {
            host: String::from("127.0.0.1"),
            environment: AppEnvironment::Development,
            port: 0,
            url: String::from("http://127.0.0.1"),
        }));

        Self {
            router: app::router(ctx.clone()),
            ctx,
        }
    }

    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => request.body(Body::empty()),
        }
        .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();

        let body = match bytes.is_empty() {
            true => Value::Null,
            false => serde_json::from_slice(&bytes).unwrap(),
        };

        (status, body)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, data: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(json!({ "data": data }))).await
    }

    pub async fn put(&self, uri: &str, data: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(json!({ "data": data }))).await
    }

    pub async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    pub async fn dishes(&self) -> Vec<Dish> {
        self.ctx.db.dishes.lock().await.all().to_vec()
    }

    pub async fn orders(&self) -> Vec<Order> {
        self.ctx.db.orders.lock().await.all().to_vec()
    }

    /// Puts an order straight into the collection, bypassing validation.
    pub async fn seed_order(&self, id: &str, status: OrderStatus) -> Order {
        let order: Order = serde_json::from_value(json!({
            "id": id,
            "deliverTo": "308 Negra Arroyo Lane",
            "mobileNumber": "(505) 143-3369",
            "status": status,
            "dishes": [{ "dishId": "d1", "quantity": 2 }]
        }))
        .unwrap();

        self.ctx.db.orders.lock().await.append(order.clone());
        order
    }
}

pub fn taco() -> Value {
    json!({
        "name": "Taco",
        "description": "d",
        "price": 5,
        "image_url": "u"
    })
}

pub fn order_data() -> Value {
    json!({
        "deliverTo": "308 Negra Arroyo Lane",
        "mobileNumber": "(505) 143-3369",
        "dishes": [{ "dishId": "d1", "name": "Taco", "quantity": 2 }]
    })
}

pub fn without(mut value: Value, field: &str) -> Value {
    if let Some(map) = value.as_object_mut() {
        map.remove(field);
    }
    value
}

pub fn with(mut value: Value, field: &str, replacement: Value) -> Value {
    if let Some(map) = value.as_object_mut() {
        map.insert(field.to_string(), replacement);
    }
    value
}
