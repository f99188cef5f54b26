//! # Domain Entities
//!
//! - [`AoTable`]: table definition record served by the API

pub mod ao_table;

pub use ao_table::{AoTable, COMMENT_MAX_LEN, DESCRIPTION_MAX_LEN, NAME_MAX_LEN, TYPE_MAX_LEN};
