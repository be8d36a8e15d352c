//! Comment API handlers
//!
//! Implements the `/comments` REST endpoints:
//! - GET /comments - List comments with filter parameters
//! - GET /comments/{id} - Get a comment
//! - POST /comments - Create a comment
//! - PATCH /comments/{id} - Update the comment text
//! - DELETE /comments/{id} - Soft-delete a comment

use actix_web::{HttpResponse, delete, get, patch, post, web};
use sea_orm::DatabaseConnection;
use serde_json::json;

use remark_common::{
    COMMENT_REQUIRED, ENTITY_ID_REQUIRED, ENTITY_NAME_REQUIRED, MESSAGE, MODULE_NAME_REQUIRED,
    SUCCESSFULLY_DELETED,
};

use crate::model::{CommentCreateParam, CommentFilterParameters, CommentUpdateParam};
use crate::service;

use super::error::AppError;

/// Find all comments supported with filter parameters.
#[get("")]
pub async fn find_all(
    db: web::Data<DatabaseConnection>,
    filter: web::Query<CommentFilterParameters>,
) -> Result<HttpResponse, AppError> {
    let comments = service::comment::find_all(db.get_ref(), &filter).await?;

    Ok(HttpResponse::Ok().json(comments))
}

/// Find the comment by its id.
#[get("/{id}")]
pub async fn find_by_id(
    db: web::Data<DatabaseConnection>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    let comment = service::comment::find_by_id(db.get_ref(), *id).await?;

    Ok(HttpResponse::Ok().json(comment))
}

/// Save a comment.
#[post("")]
pub async fn save(
    db: web::Data<DatabaseConnection>,
    body: web::Json<CommentCreateParam>,
) -> Result<HttpResponse, AppError> {
    let (comment, module_name, entity_name, entity_id) = match validate_create(&body) {
        Ok(fields) => fields,
        Err(message) => {
            return Ok(HttpResponse::BadRequest().json(json!({ MESSAGE: message })));
        }
    };

    let created =
        service::comment::create(db.get_ref(), comment, module_name, entity_name, entity_id)
            .await?;

    Ok(HttpResponse::Created().json(created))
}

/// Update a comment.
///
/// Only the comment text is applied; identity fields in the body are
/// ignored.
#[patch("/{id}")]
pub async fn update(
    db: web::Data<DatabaseConnection>,
    id: web::Path<i32>,
    body: web::Json<CommentUpdateParam>,
) -> Result<HttpResponse, AppError> {
    let comment = match non_blank(body.comment.as_deref()) {
        Some(comment) => comment,
        None => {
            return Ok(HttpResponse::BadRequest().json(json!({ MESSAGE: COMMENT_REQUIRED })));
        }
    };

    let updated = service::comment::update(db.get_ref(), *id, comment).await?;

    Ok(HttpResponse::Ok().json(updated))
}

/// Delete a comment.
#[delete("/{id}")]
pub async fn delete_comment(
    db: web::Data<DatabaseConnection>,
    id: web::Path<i32>,
) -> Result<HttpResponse, AppError> {
    service::comment::delete(db.get_ref(), *id).await?;

    Ok(HttpResponse::Ok().json(json!({ MESSAGE: SUCCESSFULLY_DELETED })))
}

fn validate_create(param: &CommentCreateParam) -> Result<(&str, &str, &str, i32), &'static str> {
    let comment = non_blank(param.comment.as_deref()).ok_or(COMMENT_REQUIRED)?;
    let module_name = non_blank(param.module_name.as_deref()).ok_or(MODULE_NAME_REQUIRED)?;
    let entity_name = non_blank(param.entity_name.as_deref()).ok_or(ENTITY_NAME_REQUIRED)?;
    let entity_id = param.entity_id.ok_or(ENTITY_ID_REQUIRED)?;

    Ok((comment, module_name, entity_name, entity_id))
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|value| !value.trim().is_empty())
}
