//! # In-Memory Repositories
//!
//! In-memory implementations for testing without database dependencies.
//!
//! ## Thread Safety
//!
//! Storage sits behind `Arc<RwLock<HashMap>>`; clones share one map.

pub mod table_repository;

pub use table_repository::InMemoryTableRepository;
