//! # REST Routes
//!
//! Router construction and HTTP middleware.

use crate::api::rest::handlers::{
    AppState, create_table, delete_table, get_table, health, list_tables, update_table,
};
use axum::Router;
use axum::http::HeaderValue;
use axum::routing::get;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Creates the API router with all routes and no middleware.
///
/// Paths match exactly; `/tables` is not an alias of `/Tables`.
#[must_use]
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/Tables", get(list_tables).post(create_table))
        .route(
            "/Tables/{id}",
            get(get_table).put(update_table).delete(delete_table),
        )
        .route("/health", get(health))
        .with_state(state)
}

/// Creates the router wrapped in request tracing and CORS.
#[must_use]
pub fn create_app(state: AppState, cors_origins: &[String]) -> Router {
    create_router(state)
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
}

/// Builds the CORS layer. An empty origin list allows any origin.
///
/// Origins that are not valid header values are skipped with a warning.
#[must_use]
pub fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.is_empty() {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(%origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::in_memory::InMemoryTableRepository;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(origins: &[String]) -> Router {
        let state = AppState::new(Arc::new(InMemoryTableRepository::new()));
        create_app(state, origins)
    }

    #[tokio::test]
    async fn lists_empty_collection() {
        let response = app(&[])
            .oneshot(Request::get("/Tables").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn malformed_id_is_bad_request() {
        let response = app(&[])
            .oneshot(Request::get("/Tables/not-a-uuid").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn resource_path_is_case_sensitive() {
        let response = app(&[])
            .oneshot(Request::get("/tables").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn configured_origin_is_echoed() {
        let origin = "http://localhost:4200";
        let response = app(&[origin.to_string()])
            .oneshot(
                Request::get("/Tables")
                    .header(header::ORIGIN, origin)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            origin
        );
    }

    #[tokio::test]
    async fn empty_origin_list_allows_any() {
        let response = app(&[])
            .oneshot(
                Request::get("/health")
                    .header(header::ORIGIN, "http://example.com")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }
}
