//! Server startup modules
//!
//! Logging initialization and HTTP server setup.

pub mod http;
pub mod logging;

pub use http::api_server;
pub use logging::{LoggingConfig, init_logging};
