//! Main entry point for the Remark comment server.
//!
//! This file loads configuration, initializes logging, connects to the
//! database, and starts the HTTP server.

use remark_server::{
    model::{AppState, Configuration},
    startup,
};
use tracing::info;

#[actix_web::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize configuration and logging
    let configuration = Configuration::new();

    let logging_config = configuration.logging_config();
    let _logging_guard = startup::init_logging(&logging_config)?;

    let address = configuration.server_address();
    let port = configuration.server_port();

    let database_connection = configuration.database_connection().await?;
    info!("Database connection established");

    let app_state = AppState {
        configuration,
        database_connection,
    };

    info!("Starting Remark server on {}:{}", address, port);
    startup::api_server(app_state, address, port)?.await?;

    Ok(())
}
