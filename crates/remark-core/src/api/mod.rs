//! REST API for the `/comments` resource
//!
//! Thin request/response mapping over the service layer: actix-web macro
//! routes, request validation with fixed messages, and error-to-status
//! mapping.

pub mod comment;
pub mod error;
pub mod route;

pub use error::AppError;
