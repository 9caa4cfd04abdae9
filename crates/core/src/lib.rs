//! Shared domain types for the Aletheia service.
//!
//! This crate has no internal dependencies so it can be used by both the
//! store adapter and the API layer.

pub mod catalog;
pub mod error;
pub mod pagination;
pub mod types;
