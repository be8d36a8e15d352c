//! Remark Core - Comment service
//!
//! This crate provides:
//! - Comment CRUD operations with soft delete
//! - Filter/sort/page query translation
//! - REST handlers for the `/comments` resource

pub mod api;
pub mod model;
pub mod service;

// Re-export commonly used types
pub use model::*;
