//! # Value Objects
//!
//! Immutable types with domain semantics.
//!
//! - [`TableId`]: UUID-based record identifier

pub mod ids;

pub use ids::TableId;
