//! HTTP client wrapper tests against a local axum server.

use std::collections::HashMap;

use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
use serde_json::json;

use cinescout::error::AppError;
use cinescout::services::providers::{MovieProvider, RecommenderApi};

/// Binds the router on an ephemeral port and returns the base URL
async fn spawn_server(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn test_search_decodes_data_envelope() {
    // Echo the query parameter back as the title so the test can verify
    // the parameter made it across
    let app = Router::new().route(
        "/search",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            let query = params.get("query").cloned().unwrap_or_default();
            Json(json!({
                "data": [
                    {"movieId": 1, "title": query, "genres": "Sci-Fi"},
                    {"movieId": 9, "title": "Incendies", "genres": "Drama"}
                ]
            }))
        }),
    );
    let base_url = spawn_server(app).await;

    let client = RecommenderApi::new(base_url);
    let movies = client.search_movies("inception").await.unwrap();

    assert_eq!(movies.len(), 2);
    assert_eq!(movies[0].title, "inception");
    assert_eq!(movies[0].movie_id, 1);
    assert_eq!(movies[1].title, "Incendies");
}

#[tokio::test]
async fn test_recommend_passes_movie_id() {
    let app = Router::new().route(
        "/recommend",
        get(|Query(params): Query<HashMap<String, String>>| async move {
            let id: u64 = params
                .get("movie_id")
                .and_then(|v| v.parse().ok())
                .unwrap_or(0);
            Json(json!({
                "data": [{"movieId": id, "title": "Interstellar", "genres": "Sci-Fi"}]
            }))
        }),
    );
    let base_url = spawn_server(app).await;

    let client = RecommenderApi::new(base_url);
    let movies = client.recommend_movies(42).await.unwrap();

    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0].movie_id, 42);
}

#[tokio::test]
async fn test_recommend_empty_data_is_ok() {
    let app = Router::new().route("/recommend", get(|| async { Json(json!({"data": []})) }));
    let base_url = spawn_server(app).await;

    let client = RecommenderApi::new(base_url);
    let movies = client.recommend_movies(1).await.unwrap();
    assert!(movies.is_empty());
}

#[tokio::test]
async fn test_non_success_status_is_external_api_error() {
    let app = Router::new().route(
        "/search",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
    );
    let base_url = spawn_server(app).await;

    let client = RecommenderApi::new(base_url);
    let err = client.search_movies("inception").await.unwrap_err();

    match err {
        AppError::ExternalApi(msg) => {
            assert!(msg.contains("500"), "unexpected message: {msg}");
        }
        other => panic!("expected ExternalApi error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_client_error() {
    // Wrong envelope shape: no "data" key
    let app = Router::new().route("/search", get(|| async { Json(json!({"results": []})) }));
    let base_url = spawn_server(app).await;

    let client = RecommenderApi::new(base_url);
    let err = client.search_movies("inception").await.unwrap_err();
    assert!(matches!(err, AppError::HttpClient(_)));
}

#[tokio::test]
async fn test_transport_failure_is_client_error() {
    // Nothing is listening here
    let client = RecommenderApi::new("http://127.0.0.1:9".to_string());
    let err = client.search_movies("inception").await.unwrap_err();
    assert!(matches!(err, AppError::HttpClient(_)));
}

#[tokio::test]
async fn test_empty_query_rejected_without_network() {
    let client = RecommenderApi::new("http://127.0.0.1:9".to_string());
    let err = client.search_movies("   ").await.unwrap_err();
    assert!(matches!(err, AppError::InvalidInput(_)));
}
