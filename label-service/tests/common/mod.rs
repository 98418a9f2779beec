#![allow(dead_code)]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use label_service::services::{InMemoryStore, LabelStore};
use label_service::{build_router, AppState};
use mongodb::bson::{doc, Document};
use std::sync::Arc;
use tower::util::ServiceExt;

pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: serde_json::Value,
}

pub fn router_with(store: impl LabelStore + 'static) -> Router {
    build_router(AppState::new(Arc::new(store)), &[])
}

pub async fn get(router: Router, uri: &str) -> TestResponse {
    send(router, Request::builder().uri(uri).body(Body::empty()).unwrap()).await
}

pub async fn send(router: Router, request: Request<Body>) -> TestResponse {
    let response = router.oneshot(request).await.unwrap();

    let status = response.status();
    let content_type = response
        .headers()
        .get("content-type")
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or_else(|_| {
            serde_json::Value::String(String::from_utf8_lossy(&bytes).into_owned())
        })
    };

    TestResponse {
        status,
        content_type,
        body,
    }
}

pub fn label(order_nr: i32, item_number: &str, barcode_id: Option<&str>) -> Document {
    let mut label = doc! {
        "OrderNr": order_nr,
        "PlantDate": "2024-05-01",
        "ItemNumber": item_number,
        "Quantity": 3,
        "ItemDescription": format!("Item {}", item_number),
        "PickAreaName": "Greenhouse 1",
    };
    if let Some(barcode_id) = barcode_id {
        label.insert("barcodeId", barcode_id);
    }
    label
}

pub fn order_header(order_nr: i32, customer: &str) -> Document {
    doc! {
        "OrderNr": order_nr,
        "CustomerName": customer,
        "ShipVia": "Truck",
    }
}

/// Orders 1 and 2 have labels; order 3 only has a header.
pub fn sample_store() -> InMemoryStore {
    InMemoryStore::new()
        .with_labels([
            label(1, "A1", Some("B-1-A1")),
            label(1, "A2", None),
            label(2, "C7", Some("B-2-C7")),
        ])
        .with_order_headers([
            order_header(1, "Acme Nurseries"),
            order_header(2, "Bloom & Co"),
            order_header(3, "No Labels Ltd"),
        ])
}
