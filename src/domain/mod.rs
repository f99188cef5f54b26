//! # Domain Layer
//!
//! Record types and the checks that apply to them, free of any transport
//! or storage concerns.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use errors::{DomainError, DomainResult};
