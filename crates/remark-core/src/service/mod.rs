//! Comment service layer
//!
//! This module provides database operations for comment management:
//! - Filtered/sorted/paginated list queries
//! - Lookup by id with the not-found contract
//! - Create, update (comment text only), soft delete

pub mod comment;
