//! Comment data models
//!
//! This module contains the wire-facing data structures:
//! - Comment info for responses
//! - Create/update request params
//! - The flat filter/sort/page parameter set for list queries

pub mod comment;

pub use comment::*;
