//! Shared helpers for cinedex-axum integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, Response};
use http_body_util::BodyExt;
use tower::ServiceExt;

use cinedex_axum::{AxumContext, CorsConfig, create_router};
use cinedex_db::TestDb;

/// Router over an in-memory store loaded with the sample catalog.
pub async fn seeded_app() -> (TestDb, Router) {
    let db = TestDb::new().await.expect("Failed to create test database");
    db.seed_sample_catalog()
        .await
        .expect("Failed to seed test database");
    let app = create_router(AxumContext::new(db.pool().clone()), &CorsConfig::AllowAll);
    (db, app)
}

/// Router over an in-memory store with no rows.
pub async fn empty_app() -> (TestDb, Router) {
    let db = TestDb::new().await.expect("Failed to create test database");
    let app = create_router(AxumContext::new(db.pool().clone()), &CorsConfig::AllowAll);
    (db, app)
}

/// Send a GET request through the router.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

/// Collect a response body as a string.
pub async fn body_string(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_string(response).await).unwrap()
}
