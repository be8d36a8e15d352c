//! HTTP server setup module.

use actix_web::{App, HttpServer, dev::Server, middleware::Logger, web};

use remark_core::api::route;

use crate::model::AppState;

/// Creates and binds the API HTTP server.
///
/// Mounts the `/comments` resource routes and hands each worker a clone of
/// the database connection.
pub fn api_server(
    app_state: AppState,
    address: String,
    port: u16,
) -> Result<Server, std::io::Error> {
    Ok(HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())
            .app_data(web::Data::new(app_state.database_connection.clone()))
            .service(route::routes())
    })
    .bind((address, port))?
    .run())
}
