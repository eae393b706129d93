use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use product_catalog::http::{create_router, AppState};
use product_catalog::lifecycle::CatalogSystem;
use product_catalog::settings::CorsConfig;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> (CatalogSystem, Router) {
    let system = CatalogSystem::new();
    let router = create_router(
        AppState::new(system.product_client.clone()),
        &CorsConfig::default(),
    );
    (system, router)
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn with_json(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn delete(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn test_list_returns_seed_catalog() {
    let (_system, app) = app();
    let (status, body) = send(&app, get("/api/products")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert!(body["message"].is_string());
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_get_existing_product() {
    let (_system, app) = app();
    let (status, body) = send(&app, get("/api/products/1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], 1);
    assert_eq!(body["data"]["name"], "机械键盘");
    assert!(body["data"]["created_at"].is_string());
}

#[tokio::test]
async fn test_get_rejects_non_numeric_id() {
    let (_system, app) = app();
    for uri in ["/api/products/abc", "/api/products/1.5", "/api/products/1e3"] {
        let (status, body) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert_eq!(body["code"], 400);
        assert!(body.get("data").is_none());
    }
}

#[tokio::test]
async fn test_numeric_ids_outside_range_are_404() {
    let (_system, app) = app();
    for raw in ["-1", "0", "4294967296"] {
        let (status, body) = send(&app, get(&format!("/api/products/{raw}"))).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{raw}");
        assert_eq!(body["code"], 404);
        assert_eq!(body["message"], format!("product not found: id={raw}"));
    }

    let (status, _) = send(&app, delete("/api/products/-1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    let (status, _) = send(
        &app,
        with_json(Method::PUT, "/api/products/4294967296", json!({"price": 1.0})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, get("/api/products/+1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["id"], 1);
}

#[tokio::test]
async fn test_get_missing_product_is_404() {
    let (_system, app) = app();
    let (status, body) = send(&app, get("/api/products/999")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 404);
    assert_eq!(body["message"], "product not found: id=999");
}

#[tokio::test]
async fn test_create_then_fetch() {
    let (_system, app) = app();
    let payload = json!({
        "name": "测试商品",
        "description": "测试描述",
        "price": 99.99,
        "stock": 50,
        "category": "测试分类"
    });
    let (status, body) = send(&app, with_json(Method::POST, "/api/products", payload)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["code"], 0);
    let data = &body["data"];
    assert_eq!(data["id"], 6);
    assert_eq!(data["name"], "测试商品");
    assert_eq!(data["price"], 99.99);
    assert_eq!(data["created_at"], data["updated_at"]);

    let (status, body) = send(&app, get("/api/products/6")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["category"], "测试分类");
}

#[tokio::test]
async fn test_create_without_description_defaults_to_empty() {
    let (_system, app) = app();
    let payload = json!({"name": "Pen", "price": 1.5, "stock": 0, "category": "Office"});
    let (status, body) = send(&app, with_json(Method::POST, "/api/products", payload)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["data"]["description"], "");
    assert_eq!(body["data"]["stock"], 0);
}

#[tokio::test]
async fn test_create_rejects_bad_bodies() {
    let (_system, app) = app();
    let bad = [
        json!({"description": "no name", "price": 1.0, "stock": 1, "category": "c"}),
        json!({"name": "x", "price": 1.0, "stock": 1}),
        json!({"name": "x", "price": 0, "stock": 1, "category": "c"}),
        json!({"name": "x", "price": -3.5, "stock": 1, "category": "c"}),
        json!({"name": "x", "price": 1.0, "stock": -1, "category": "c"}),
        json!({"name": "  ", "price": 1.0, "stock": 1, "category": "c"}),
        json!({"name": "x", "price": "cheap", "stock": 1, "category": "c"}),
    ];
    for payload in bad {
        let (status, body) =
            send(&app, with_json(Method::POST, "/api/products", payload.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
        assert_eq!(body["code"], 400);
    }

    let (_, body) = send(&app, get("/api/products")).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_create_rejects_malformed_json() {
    let (_system, app) = app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/products")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(&app, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 400);
}

#[tokio::test]
async fn test_partial_update() {
    let (_system, app) = app();
    let (_, before) = send(&app, get("/api/products/2")).await;

    let (status, body) = send(
        &app,
        with_json(Method::PUT, "/api/products/2", json!({"price": 199.99})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let after = &body["data"];
    assert_eq!(after["price"], 199.99);
    assert_eq!(after["name"], before["data"]["name"]);
    assert_eq!(after["stock"], before["data"]["stock"]);
    assert_eq!(after["created_at"], before["data"]["created_at"]);
}

#[tokio::test]
async fn test_update_errors() {
    let (_system, app) = app();

    let (status, _) = send(
        &app,
        with_json(Method::PUT, "/api/products/999", json!({"price": 1.0})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        with_json(Method::PUT, "/api/products/abc", json!({"price": 1.0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        with_json(Method::PUT, "/api/products/1", json!({"price": -1.0})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, get("/api/products/1")).await;
    assert_eq!(body["data"]["price"], 399.0);
}

#[tokio::test]
async fn test_delete_then_404() {
    let (_system, app) = app();

    let (status, body) = send(&app, delete("/api/products/3")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["code"], 0);
    assert!(body.get("data").is_none());

    let (status, _) = send(&app, get("/api/products/3")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, delete("/api/products/3")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, delete("/api/products/abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_health_reports_product_count() {
    let (_system, app) = app();
    let (status, body) = send(&app, get("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
    assert_eq!(body["data"]["products"], 5);
}

#[tokio::test]
async fn test_cors_headers() {
    let (_system, app) = app();

    let preflight = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/products")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "PUT")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(preflight).await.unwrap();
    assert!(response.status().is_success());
    let headers = response.headers();
    assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
    assert!(headers[header::ACCESS_CONTROL_ALLOW_METHODS]
        .to_str()
        .unwrap()
        .contains("PUT"));
    assert_eq!(headers[header::ACCESS_CONTROL_MAX_AGE], "43200");

    let request = Request::builder()
        .uri("/api/products")
        .header(header::ORIGIN, "http://localhost:3000")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn test_cors_respects_origin_list() {
    let system = CatalogSystem::new();
    let cors = CorsConfig {
        allowed_origins: vec!["http://shop.example".to_string()],
        ..Default::default()
    };
    let app = create_router(AppState::new(system.product_client.clone()), &cors);

    let request = Request::builder()
        .uri("/api/products")
        .header(header::ORIGIN, "http://evil.example")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());

    let request = Request::builder()
        .uri("/api/products")
        .header(header::ORIGIN, "http://shop.example")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://shop.example"
    );
}
