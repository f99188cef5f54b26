//! # PostgreSQL Repositories
//!
//! sqlx-backed adapters sharing a `PgPool`.

pub mod table_repository;

pub use table_repository::PostgresTableRepository;
