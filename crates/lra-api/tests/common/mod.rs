//! Shared test helpers for API integration tests.
#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use http_body_util::BodyExt;
use lra_api::config::ErrorResponseConfig;
use lra_api::error::ApiError;
use lra_core::error::{ClientError, GenericLraError, WebApplicationError};
use lra_test_support::{FakeCause, coordinator_lra_id};
use tower::ServiceExt;

/// Build a router whose handlers each fail with a representative client
/// error, rendered with `config`.
pub fn build_test_app(config: ErrorResponseConfig) -> Router {
    Router::new()
        .route(
            "/lra/completed",
            get(move || async move {
                Err::<(), _>(ApiError::with_config(
                    GenericLraError::new(
                        Some(coordinator_lra_id()),
                        410,
                        "LRA has already completed",
                        None,
                    ),
                    &config,
                ))
            }),
        )
        .route(
            "/lra/internal",
            get(move || async move {
                let cause = FakeCause::wrapping(
                    "coordinator call failed",
                    FakeCause::new("connection reset"),
                )
                .into_cause();
                Err::<(), _>(ApiError::with_config(
                    GenericLraError::new(None, 500, "internal failure", Some(cause)),
                    &config,
                ))
            }),
        )
        .route(
            "/lra/bogus-status",
            get(move || async move {
                Err::<(), _>(ApiError::with_config(
                    GenericLraError::new(Some(coordinator_lra_id()), -1, "", None),
                    &config,
                ))
            }),
        )
        .route(
            "/web/unauthorized",
            get(move || async move {
                Err::<(), _>(ApiError::with_config(
                    ClientError::from(WebApplicationError::new(401, "unauthorized", None)),
                    &config,
                ))
            }),
        )
}

/// Send a GET request and return the response.
pub async fn get_json(app: Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}
