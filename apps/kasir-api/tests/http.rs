//! HTTP integration tests.
//!
//! Starts the axum router on an ephemeral port and exercises it with reqwest.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, Method, StatusCode};
use serde_json::{json, Value};

use kasir_api::routes::{degraded_router, router};
use kasir_api::ProductService;
use kasir_core::{Product, ProductInput};
use kasir_db::{DbError, DbResult, InMemoryProductRepository, ProductRepository};

/// Bind to port 0 and return the base URL.
async fn start_server(app: axum::Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn seeded_server() -> String {
    let service = ProductService::new(Arc::new(InMemoryProductRepository::seeded()));
    start_server(router(service)).await
}

fn assert_json(resp: &reqwest::Response) {
    assert_eq!(
        resp.headers()[reqwest::header::CONTENT_TYPE],
        "application/json",
        "{} {}",
        resp.status(),
        resp.url()
    );
}

#[tokio::test]
async fn health_check() {
    let base = seeded_server().await;

    let resp = Client::new().get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_json(&resp);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"status": "OK", "message": "API Running"}));
}

#[tokio::test]
async fn list_returns_seed_catalog() {
    let base = seeded_server().await;

    let resp = Client::new().get(format!("{base}/api/produk")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_json(&resp);

    let body: Value = resp.json().await.unwrap();
    assert_eq!(
        body,
        json!([
            {"id": 1, "nama": "Indomie Godog", "harga": 3500, "stok": 10},
            {"id": 2, "nama": "Vit 1000ml", "harga": 3000, "stok": 40},
            {"id": 3, "nama": "Kecap", "harga": 12000, "stok": 20},
        ])
    );
}

#[tokio::test]
async fn product_lifecycle() {
    let base = seeded_server().await;
    let client = Client::new();

    let resp = client
        .post(format!("{base}/api/produk"))
        .json(&json!({"nama": "Teh", "harga": 5000, "stok": 15}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    assert_json(&resp);
    let created: Product = resp.json().await.unwrap();
    assert_eq!(created, ProductInput::new("Teh", 5000, 15).into_product(4));

    let resp = client.get(format!("{base}/api/produk/4")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.json::<Product>().await.unwrap(), created);

    let resp = client
        .put(format!("{base}/api/produk/4"))
        .json(&json!({"nama": "Teh Botol", "harga": 5500, "stok": 12}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Product = resp.json().await.unwrap();
    assert_eq!(updated, ProductInput::new("Teh Botol", 5500, 12).into_product(4));

    let resp = client.get(format!("{base}/api/produk/4")).send().await.unwrap();
    assert_eq!(resp.json::<Product>().await.unwrap(), updated);

    let resp = client.delete(format!("{base}/api/produk/4")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_json(&resp);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"message": "sukses delete"}));

    let resp = client.get(format!("{base}/api/produk/4")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_json(&resp);
}

#[tokio::test]
async fn create_ignores_client_id_and_never_reuses_ids() {
    let base = seeded_server().await;
    let client = Client::new();

    client.delete(format!("{base}/api/produk/3")).send().await.unwrap();

    let resp = client
        .post(format!("{base}/api/produk"))
        .json(&json!({"id": 2, "nama": "Kopi", "harga": 7000, "stok": 5}))
        .send()
        .await
        .unwrap();
    let created: Product = resp.json().await.unwrap();
    assert_eq!(created.id, 4);

    let products: Vec<Product> = client
        .get(format!("{base}/api/produk"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let ids: Vec<i64> = products.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 4]);
}

#[tokio::test]
async fn malformed_bodies_are_bad_requests() {
    let base = seeded_server().await;
    let client = Client::new();

    for body in [
        "",
        "{not json",
        r#"{"harga":"5000"}"#,
        "[]",
        r#"[null,"Teh",5000,15]"#,
    ] {
        let resp = client
            .post(format!("{base}/api/produk"))
            .body(body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "POST {body:?}");
        assert_json(&resp);

        let resp = client
            .put(format!("{base}/api/produk/1"))
            .body(body)
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "PUT {body:?}");
    }

    // Nothing was written.
    let products: Vec<Product> = client
        .get(format!("{base}/api/produk"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(products.len(), 3);
    assert_eq!(products[0].name, "Indomie Godog");
}

#[tokio::test]
async fn body_without_content_type_is_accepted() {
    let base = seeded_server().await;

    let resp = Client::new()
        .post(format!("{base}/api/produk"))
        .body(r#"{"nama":"Teh","harga":5000,"stok":15}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
}

#[tokio::test]
async fn body_keys_match_case_insensitively() {
    let base = seeded_server().await;

    let resp = Client::new()
        .post(format!("{base}/api/produk"))
        .body(r#"{"NAMA":"Teh","Harga":5000,"STOK":15}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let created: Product = resp.json().await.unwrap();
    assert_eq!(created, ProductInput::new("Teh", 5000, 15).into_product(4));
}

#[tokio::test]
async fn invalid_ids_are_bad_requests() {
    let base = seeded_server().await;
    let client = Client::new();

    for path in ["abc", "", "1/2", "1.5"] {
        for method in [Method::GET, Method::PUT, Method::DELETE] {
            let resp = client
                .request(method.clone(), format!("{base}/api/produk/{path}"))
                .json(&json!({"nama": "Teh"}))
                .send()
                .await
                .unwrap();
            assert_eq!(
                resp.status(),
                StatusCode::BAD_REQUEST,
                "{method} /api/produk/{path}"
            );
            assert_json(&resp);
        }
    }
}

#[tokio::test]
async fn missing_ids_are_not_found() {
    let base = seeded_server().await;
    let client = Client::new();

    for method in [Method::GET, Method::PUT, Method::DELETE] {
        let resp = client
            .request(method.clone(), format!("{base}/api/produk/99"))
            .json(&json!({"nama": "Teh"}))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{method}");
    }
}

#[tokio::test]
async fn wrong_methods_are_rejected() {
    let base = seeded_server().await;
    let client = Client::new();

    let cases = [
        (Method::PUT, "/api/produk"),
        (Method::DELETE, "/api/produk"),
        (Method::PATCH, "/api/produk"),
        (Method::POST, "/api/produk/1"),
        (Method::PATCH, "/api/produk/1"),
    ];

    for (method, path) in cases {
        let resp = client
            .request(method.clone(), format!("{base}{path}"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED, "{method} {path}");
        assert_json(&resp);
    }
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let base = seeded_server().await;

    let resp = Client::new().get(format!("{base}/api/kategori")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    assert_json(&resp);
}

#[tokio::test]
async fn concurrent_creates_get_unique_ids() {
    let base = seeded_server().await;
    let client = Client::new();

    let requests = (0..20).map(|i| {
        let client = client.clone();
        let url = format!("{base}/api/produk");
        tokio::spawn(async move {
            client
                .post(url)
                .json(&json!({"nama": format!("Item {i}"), "harga": i, "stok": i}))
                .send()
                .await
                .unwrap()
                .json::<Product>()
                .await
                .unwrap()
                .id
        })
    });

    let mut ids = Vec::new();
    for handle in requests.collect::<Vec<_>>() {
        ids.push(handle.await.unwrap());
    }
    ids.sort_unstable();
    ids.dedup();

    assert_eq!(ids, (4..24).collect::<Vec<i64>>());
}

#[tokio::test]
async fn degraded_mode_serves_unavailable() {
    let base = start_server(degraded_router()).await;
    let client = Client::new();

    let resp = client.get(format!("{base}/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let cases = [
        (Method::GET, "/api/produk"),
        (Method::POST, "/api/produk"),
        (Method::GET, "/api/produk/1"),
        (Method::PUT, "/api/produk/1"),
        (Method::DELETE, "/api/produk/abc"),
        (Method::PATCH, "/api/produk/"),
    ];

    for (method, path) in cases {
        let resp = client
            .request(method.clone(), format!("{base}{path}"))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE, "{method} {path}");
        assert_json(&resp);
    }
}

/// Repository whose every call fails as a broken database would.
struct BrokenRepository;

#[async_trait]
impl ProductRepository for BrokenRepository {
    async fn create(&self, _input: ProductInput) -> DbResult<Product> {
        Err(DbError::QueryFailed("connection reset".into()))
    }

    async fn list(&self) -> DbResult<Vec<Product>> {
        Err(DbError::QueryFailed("connection reset".into()))
    }

    async fn get_by_id(&self, _id: i64) -> DbResult<Product> {
        Err(DbError::PoolExhausted)
    }

    async fn update(&self, _id: i64, _input: ProductInput) -> DbResult<Product> {
        Err(DbError::Internal("boom".into()))
    }

    async fn delete(&self, _id: i64) -> DbResult<()> {
        Err(DbError::ConnectionFailed("refused".into()))
    }
}

#[tokio::test]
async fn storage_failures_are_internal_errors() {
    let base = start_server(router(ProductService::new(Arc::new(BrokenRepository)))).await;
    let client = Client::new();

    let resp = client.get(format!("{base}/api/produk")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({"error": "Database operation failed"}));

    let resp = client.get(format!("{base}/api/produk/1")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    // Id validation still happens first.
    let resp = client.get(format!("{base}/api/produk/abc")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}
