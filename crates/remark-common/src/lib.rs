//! Remark Common - Shared error types and constants
//!
//! This crate provides the foundational types used across all Remark
//! components:
//! - Error types
//! - Wire message constants

pub mod error;

// Re-exports for convenience
pub use error::RemarkError;

/// Key of the single-field JSON payload returned by delete.
pub const MESSAGE: &str = "message";

/// Success payload text for delete.
pub const SUCCESSFULLY_DELETED: &str = "Successfully deleted.";

/// Required-field validation messages, matching the wire contract.
pub const COMMENT_REQUIRED: &str = "Comment is required.";
pub const MODULE_NAME_REQUIRED: &str = "Module name is required.";
pub const ENTITY_NAME_REQUIRED: &str = "Entity name is required.";
pub const ENTITY_ID_REQUIRED: &str = "Entity Id is required.";
