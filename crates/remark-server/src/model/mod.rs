//! Server data models
//!
//! Configuration and the application state shared across handlers.

pub mod app_state;
pub mod config;

pub use app_state::AppState;
pub use config::Configuration;
