//! Integration tests for the Axum web server.
//!
//! These tests drive the full router against an in-memory store.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;

use cinedex_axum::{AxumContext, CorsConfig, create_static_router};
use cinedex_db::{Related, TestDb};
use common::{body_json, body_string, empty_app, get, seeded_app};

#[tokio::test]
async fn health_endpoint_returns_ok() {
    let (_db, app) = empty_app().await;

    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "OK");
}

#[tokio::test]
async fn list_returns_envelope_with_every_movie() {
    let (db, app) = seeded_app().await;

    let response = get(app, "/api/movies").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len() as i64, db.movie_count().await.unwrap());
}

#[tokio::test]
async fn list_on_empty_store_is_not_found() {
    let (_db, app) = empty_app().await;

    let response = get(app, "/api/movies").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body, serde_json::json!({ "message": "No movies available." }));
}

#[tokio::test]
async fn free_text_search_returns_bare_list() {
    let (_db, app) = seeded_app().await;

    let response = get(app, "/api/movies/search?searchValue=the%20matrix").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let movies = body.as_array().expect("search answers a bare array");
    let names: Vec<&str> = movies.iter().map(|m| m["mName"].as_str().unwrap()).collect();
    assert_eq!(names, vec!["The Matrix", "The Matrix Reloaded"]);
}

#[tokio::test]
async fn free_text_search_without_match_is_not_found() {
    let (_db, app) = seeded_app().await;

    let response = get(app, "/api/movies/search?searchValue=zzz").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body, serde_json::json!({ "message": "No movies found." }));
}

#[tokio::test]
async fn free_text_search_ignores_structured_filters() {
    let (_db, app) = seeded_app().await;

    // The suggestion path takes only the term; genre and year are not applied
    let response = get(app, "/api/movies/search?searchValue=heat&genre=Animation&year=2021").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
    assert_eq!(body[0]["mName"], "Heat");
}

#[tokio::test]
async fn genre_filter_returns_only_members() {
    let (_db, app) = seeded_app().await;

    let response = get(app, "/api/movies/search?genre=Drama").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let movies = body.as_array().unwrap();
    assert!(!movies.is_empty());
    for movie in movies {
        let genres = movie["genres"].as_str().unwrap();
        assert!(genres.split(',').any(|g| g == "Drama"), "{movie}");
    }
}

#[tokio::test]
async fn genre_without_movies_is_empty_success() {
    let (db, app) = seeded_app().await;
    db.insert_named(Related::Genre, 42, "Western").await.unwrap();

    let response = get(app, "/api/movies/search?genre=Western").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn blank_search_value_takes_filter_path() {
    let (_db, app) = seeded_app().await;

    let response = get(app, "/api/movies/search?searchValue=&year=1999&rating=8.75").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let movies = body.as_array().unwrap();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["mName"], "Fight Club");
}

#[tokio::test]
async fn no_filters_returns_every_movie_sorted_by_year() {
    let (db, app) = seeded_app().await;

    let response = get(app, "/api/movies/search").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let movies = body.as_array().unwrap();
    assert_eq!(movies.len() as i64, db.movie_count().await.unwrap());

    let years: Vec<i64> = movies
        .iter()
        .map(|m| m["yearOfRelease"].as_i64().unwrap())
        .collect();
    let mut sorted = years.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(years, sorted);
}

#[tokio::test]
async fn movie_without_actors_has_null_actors() {
    let (_db, app) = seeded_app().await;

    let response = get(app, "/api/movies/search?year=2021").await;

    let body = body_json(response).await;
    assert_eq!(body[0]["mName"], "Untitled Short");
    assert!(body[0]["actors"].is_null());
    assert!(body[0]["genres"].is_null());
}

#[tokio::test]
async fn store_failure_is_opaque_internal_error() {
    let (db, app) = seeded_app().await;
    db.pool().close().await;

    for uri in [
        "/api/movies",
        "/api/movies/search?searchValue=heat",
        "/api/movies/search?genre=Drama",
    ] {
        let response = get(app.clone(), uri).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");
        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "error": "Internal Server Error" }));
    }
}

#[tokio::test]
async fn unreadable_query_string_is_opaque_internal_error() {
    let (_db, app) = seeded_app().await;

    let response = get(app, "/api/movies/search?year=1999&year=2000").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body, serde_json::json!({ "error": "Internal Server Error" }));
}

#[tokio::test]
async fn malformed_rating_and_year_match_nothing() {
    let (_db, app) = seeded_app().await;

    let response = get(app, "/api/movies/search?rating=abc&year=19x9").await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn unknown_route_is_plain_text_not_found() {
    let (_db, app) = empty_app().await;

    for uri in ["/nope", "/api/unknown"] {
        let response = get(app.clone(), uri).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body_string(response).await, "404 - Not Found");
    }
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let (_db, app) = seeded_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/movies")
                .header(header::ORIGIN, "http://example.test")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "*"
    );
}

#[tokio::test]
async fn static_router_serves_files_and_api() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>cinedex</h1>").unwrap();

    let db = TestDb::new().await.unwrap();
    db.seed_sample_catalog().await.unwrap();
    let app = create_static_router(
        AxumContext::new(db.pool().clone()),
        dir.path(),
        &CorsConfig::AllowAll,
    );

    let response = get(app.clone(), "/index.html").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "<h1>cinedex</h1>");

    let response = get(app.clone(), "/api/movies").await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(app, "/missing.css").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_string(response).await, "404 - Not Found");
}
