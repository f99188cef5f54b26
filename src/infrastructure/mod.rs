//! # Infrastructure Layer
//!
//! Adapters to external systems. Currently only persistence.

pub mod persistence;
