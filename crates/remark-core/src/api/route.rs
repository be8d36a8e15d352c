//! Comment API routing configuration

use actix_web::{Scope, web};

use super::comment;

/// Create the `/comments` resource routes
///
/// Routes:
/// - GET /comments - List comments with filter parameters
/// - GET /comments/{id} - Get a comment
/// - POST /comments - Create a comment
/// - PATCH /comments/{id} - Update the comment text
/// - DELETE /comments/{id} - Soft-delete a comment
pub fn routes() -> Scope {
    web::scope("/comments")
        .service(comment::find_all)
        .service(comment::find_by_id)
        .service(comment::save)
        .service(comment::update)
        .service(comment::delete_comment)
}
