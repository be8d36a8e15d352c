//! Remark Server - HTTP server wiring
//!
//! This crate assembles the deployable service:
//! - Configuration loading (file, environment, CLI overrides)
//! - Logging initialization
//! - HTTP server setup

pub mod model;
pub mod startup;
