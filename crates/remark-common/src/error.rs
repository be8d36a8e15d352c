//! Error types for Remark
//!
//! `RemarkError` is the application-specific error enum. Service functions
//! return `anyhow::Result` and wrap these variants; the HTTP layer downcasts
//! to map them to status codes.

use thiserror::Error;

/// Application-specific error types
#[derive(Error, Debug)]
pub enum RemarkError {
    /// Requested comment id has no corresponding non-deleted row.
    #[error("Comment not found.")]
    CommentNotFound,

    /// Date-range filter string is not two epoch-millisecond values
    /// separated by "to".
    #[error("Invalid date range.")]
    InvalidDateRange,

    /// sortBy names a field outside the entity's column set.
    #[error("Invalid sort field: {0}")]
    InvalidSortField(String),

    #[error("{0}")]
    IllegalArgument(String),

    #[error("database error: {0}")]
    DatabaseError(String),
}
