//! # ao-tables
//!
//! CRUD REST API for `AoTable` records.
//!
//! ## Architecture
//!
//! - [`api`]: axum handlers, request validation and status mapping
//! - [`domain`]: the [`AoTable`](domain::entities::AoTable) record and its checks
//! - [`infrastructure`]: the [`TableRepository`](infrastructure::persistence::TableRepository)
//!   port with PostgreSQL and in-memory adapters
//! - [`config`]: layered settings (defaults, file, environment)
//! - [`telemetry`]: tracing subscriber setup
//!
//! ## Error Contract
//!
//! Every failed request is answered with `400 Bad Request` and a plain-text
//! reason; store faults pass their message through and are logged.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
