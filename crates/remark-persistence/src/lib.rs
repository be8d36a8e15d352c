//! Remark Persistence - Database entities
//!
//! This crate provides the SeaORM entity definitions backing the comment
//! store.

pub mod entity;

// Re-export sea-orm for convenience
pub use sea_orm;

// Re-export entity prelude
pub use entity::prelude::*;
