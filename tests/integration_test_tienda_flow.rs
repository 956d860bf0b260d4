mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    if bytes.is_empty() {
        panic!("Response body is empty. Status: {}", status);
    }
    match serde_json::from_slice(&bytes) {
        Ok(v) => v,
        Err(e) => panic!("Failed to parse JSON: {:?}. Status: {}. Body: {:?}", e, status, String::from_utf8_lossy(&bytes)),
    }
}

#[tokio::test]
async fn test_health_check() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/health")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_store_registration_flow() {
    let app = TestApp::new().await;

    // 1. Register Ana
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/usuarios")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "nombre": "Ana",
                "email": "ana@x.com",
                "password": "secret1"
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let ana = parse_body(res).await;
    let ana_id = ana["id"].as_i64().unwrap();

    // 2. Ana lists a product; stock is omitted and defaults to 0
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/productos")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "nombre": "Taza",
                "precio": 9.99,
                "usuario_id": ana_id
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::CREATED);
    let taza = parse_body(res).await;
    assert_eq!(taza["stock"], 0);
    let taza_id = taza["id"].as_i64().unwrap();

    // 3. Her catalogue contains exactly that product
    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/productos/usuario/{}", ana_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    let productos = body.as_array().unwrap();
    assert_eq!(productos.len(), 1);
    assert_eq!(productos[0]["id"], taza_id);
    assert_eq!(productos[0]["nombre"], "Taza");
    assert_eq!(productos[0]["precio"], 9.99);
    assert_eq!(productos[0]["usuario_id"], ana_id);

    // 4. She is also reachable by id and by email
    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri(format!("/api/v1/usuarios/{}", ana_id))
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = app.router.clone().oneshot(
        Request::builder().method("GET").uri("/api/v1/usuarios/email/ana@x.com")
            .body(Body::empty()).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let by_email = parse_body(res).await;
    assert_eq!(by_email["id"], ana_id);
}

#[tokio::test]
async fn test_reusing_a_soft_deleted_email_hits_the_unique_constraint() {
    let app = TestApp::new().await;

    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/usuarios")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "nombre": "Ana",
                "email": "ana@x.com",
                "password": "secret1"
            }).to_string())).unwrap()
    ).await.unwrap();
    let id = parse_body(res).await["id"].as_i64().unwrap();

    sqlx::query("UPDATE usuarios SET activo = FALSE WHERE id = ?")
        .bind(id)
        .execute(&app.pool)
        .await
        .unwrap();

    // The active-row duplicate check passes, the storage-layer UNIQUE
    // constraint still rejects the email, mapped to 400.
    let res = app.router.clone().oneshot(
        Request::builder().method("POST").uri("/api/v1/usuarios")
            .header("Content-Type", "application/json")
            .body(Body::from(json!({
                "nombre": "Ana Nueva",
                "email": "ana@x.com",
                "password": "secret2"
            }).to_string())).unwrap()
    ).await.unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
