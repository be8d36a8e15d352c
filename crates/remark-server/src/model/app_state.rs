//! Application state shared across all handlers

use sea_orm::DatabaseConnection;

use super::config::Configuration;

/// Application state shared across all handlers
///
/// The database connection is the only cross-request shared state; handlers
/// receive it through `web::Data`.
#[derive(Clone)]
pub struct AppState {
    pub configuration: Configuration,
    pub database_connection: DatabaseConnection,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("configuration", &self.configuration)
            .field("database_connection", &"<DatabaseConnection>")
            .finish()
    }
}
