//! API integration tests, run in-process against the in-memory store

use axum::{
    body::{to_bytes, Body},
    http::{Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use inventory_server::{api, repository::Repository, AppConfig, AppState};

fn app() -> Router {
    api::create_router(AppState::new(AppConfig::default(), Repository::in_memory()))
}

/// Send one request and decode the JSON body
async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn get(app: &Router, uri: &str) -> Value {
    let (status, body) = send(app, Method::GET, uri, None).await;
    assert_eq!(status, StatusCode::OK, "GET {}", uri);
    body
}

async fn create(app: &Router, body: Value) -> i64 {
    let (status, body) = send(app, Method::POST, "/api/equipamentos", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    body["id"].as_i64().expect("No equipment ID")
}

fn ids(body: &Value) -> Vec<i64> {
    body["data"]
        .as_array()
        .expect("data is not an array")
        .iter()
        .map(|e| e["id"].as_i64().unwrap())
        .collect()
}

#[tokio::test]
async fn test_health_check() {
    let app = app();
    let body = get(&app, "/api/health").await;
    assert_eq!(body["status"], "healthy");

    let body = get(&app, "/api/ready").await;
    assert_eq!(body["backend"], "mock");
}

#[tokio::test]
async fn test_list_seeded_equipment() {
    let app = app();
    let body = get(&app, "/api/equipamentos").await;
    assert_eq!(body["total"], 2);
    assert_eq!(body["page"], 1);
    assert_eq!(ids(&body), vec![1, 2]);
    assert_eq!(body["data"][0]["service_tag"], "ABC123");
    assert_eq!(body["data"][1]["imei"], "359876543210123");
}

#[tokio::test]
async fn test_pagination_lengths() {
    let app = app();
    for i in 0..23 {
        create(&app, json!({ "tipo": "Notebook", "identificador": format!("TAG{}", i) })).await;
    }
    // 25 records in total with the two seeds
    for (page, size, expected) in [(1, 10, 10), (3, 10, 5), (4, 10, 0), (2, 20, 5), (1, 100, 25)] {
        let body = get(&app, &format!("/api/equipamentos?page={}&pageSize={}", page, size)).await;
        assert_eq!(body["total"], 25);
        assert_eq!(body["page"], page);
        assert_eq!(ids(&body).len(), expected, "page {} size {}", page, size);
    }

    let body = get(&app, "/api/equipamentos?page=2&pageSize=10").await;
    assert_eq!(ids(&body).first(), Some(&11));
}

#[tokio::test]
async fn test_malformed_pagination_falls_back_to_defaults() {
    let app = app();
    let body = get(&app, "/api/equipamentos?page=abc&pageSize=xyz").await;
    assert_eq!(body["page"], 1);
    assert_eq!(body["total"], 2);
    assert_eq!(ids(&body).len(), 2);
}

#[tokio::test]
async fn test_filters_are_conjunctive() {
    let app = app();
    create(&app, json!({ "tipo": "Notebook", "fabricante": "Lenovo", "identificador": "ZZZ999", "centro_custo": "CC-100" })).await;

    let body = get(&app, "/api/equipamentos?tipo=Notebook").await;
    assert_eq!(body["total"], 2);

    let body = get(&app, "/api/equipamentos?tipo=Notebook&fabricante=Dell").await;
    assert_eq!(ids(&body), vec![1]);

    // substring filters ignore case
    let body = get(&app, "/api/equipamentos?tag=abc&centro_custo=cc-1").await;
    assert_eq!(ids(&body), vec![1]);

    let body = get(&app, "/api/equipamentos?imei=98765").await;
    assert_eq!(ids(&body), vec![2]);

    // exact filters do not
    let body = get(&app, "/api/equipamentos?tipo=notebook").await;
    assert_eq!(body["total"], 0);

    // empty values are inactive
    let body = get(&app, "/api/equipamentos?tipo=&tag=").await;
    assert_eq!(body["total"], 3);
}

#[tokio::test]
async fn test_create_with_imei_identifier() {
    let app = app();
    let id = create(&app, json!({ "tipo": "Celular", "identificador": "359876543210999" })).await;
    assert_eq!(id, 3);

    let body = get(&app, "/api/equipamentos?imei=359876543210999").await;
    assert_eq!(body["total"], 1);
    let record = &body["data"][0];
    assert_eq!(record["imei"], "359876543210999");
    assert_eq!(record["service_tag"], "");
    assert_eq!(record["estado"], "EM USO");
    assert_eq!(record["centro_custo"], "");
}

#[tokio::test]
async fn test_create_with_service_tag_identifier() {
    let app = app();
    let id = create(&app, json!({ "tipo": "Notebook", "identificador": "ABC124", "estado": "Estoque" })).await;

    let body = get(&app, "/api/equipamentos?tag=ABC124").await;
    assert_eq!(ids(&body), vec![id]);
    assert_eq!(body["data"][0]["service_tag"], "ABC124");
    assert_eq!(body["data"][0]["imei"], "");
    assert_eq!(body["data"][0]["estado"], "Estoque");
}

#[tokio::test]
async fn test_update_replaces_record() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/equipamentos/1",
        Some(json!({ "tipo": "Notebook", "fabricante": "HP", "identificador": "1234567890", "estado": "Manutenção" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));

    let body = get(&app, "/api/equipamentos?fabricante=HP").await;
    assert_eq!(ids(&body), vec![1]);
    assert_eq!(body["data"][0]["imei"], "1234567890");
    assert_eq!(body["data"][0]["service_tag"], "");
    assert_eq!(body["data"][0]["estado"], "Manutenção");
}

#[tokio::test]
async fn test_update_and_delete_unknown_id_report_ok() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/equipamentos/999",
        Some(json!({ "tipo": "Tablet", "identificador": "GHOST" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);

    let (status, body) = send(&app, Method::DELETE, "/api/equipamentos/999", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);

    let body = get(&app, "/api/equipamentos").await;
    assert_eq!(body["total"], 2);
    assert_eq!(ids(&body), vec![1, 2]);
    assert_eq!(get(&app, "/api/equipamentos?tag=GHOST").await["total"], 0);
}

#[tokio::test]
async fn test_delete_removes_record() {
    let app = app();
    let (status, _) = send(&app, Method::DELETE, "/api/equipamentos/2", None).await;
    assert_eq!(status, StatusCode::OK);

    let body = get(&app, "/api/equipamentos").await;
    assert_eq!(ids(&body), vec![1]);

    // the highest id was deleted and is still not reused
    let id = create(&app, json!({ "tipo": "Notebook" })).await;
    assert_eq!(id, 3);
}

#[tokio::test]
async fn test_non_numeric_id_is_acknowledged() {
    let app = app();
    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/equipamentos/abc",
        Some(json!({ "tipo": "Tablet", "identificador": "GHOST" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));

    let (status, body) = send(&app, Method::DELETE, "/api/equipamentos/abc", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "ok": true }));

    let body = get(&app, "/api/equipamentos").await;
    assert_eq!(ids(&body), vec![1, 2]);
    assert_eq!(get(&app, "/api/equipamentos?tag=GHOST").await["total"], 0);
}

#[tokio::test]
async fn test_access_logs_empty_in_mock_mode() {
    let app = app();
    for query in ["", "?limit=0", "?limit=-5", "?limit=abc", "?limit=9999"] {
        let body = get(&app, &format!("/api/inventario/logs{}", query)).await;
        assert_eq!(body, json!({ "rows": [] }), "query {:?}", query);
    }
}
