//! # REST API
//!
//! REST endpoints using axum.
//!
//! # Endpoints
//!
//! - `GET /Tables` - List all records
//! - `GET /Tables/{id}` - Get record by ID
//! - `POST /Tables` - Create record (server assigns the id)
//! - `PUT /Tables/{id}` - Replace record
//! - `DELETE /Tables/{id}` - Delete record
//! - `GET /health` - Health check
//!
//! Every failure is `400 Bad Request` with a plain-text reason.
//!
//! # Usage
//!
//! ```ignore
//! use ao_tables::api::rest::{create_router, AppState};
//! use ao_tables::infrastructure::persistence::in_memory::InMemoryTableRepository;
//! use std::sync::Arc;
//!
//! let state = AppState::new(Arc::new(InMemoryTableRepository::new()));
//! let router = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod error;
pub mod handlers;
pub mod routes;

pub use error::{ApiError, ApiResult};
pub use handlers::{AppState, HealthResponse, StatusResponse};
pub use routes::{cors_layer, create_app, create_router};
