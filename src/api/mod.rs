//! # API Layer
//!
//! HTTP transport for the table store.

pub mod rest;
