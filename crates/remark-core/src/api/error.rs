//! Error-to-response mapping for the REST API

use std::fmt::{Display, Formatter};

use actix_web::HttpResponse;
use serde_json::json;

use remark_common::{MESSAGE, RemarkError};

/// Wrapper for application errors
///
/// Lives in this crate rather than `remark-common` so the actix-web
/// `ResponseError` impl does not run into the orphan rules.
#[derive(Debug)]
pub struct AppError {
    inner: anyhow::Error,
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(value: anyhow::Error) -> Self {
        AppError { inner: value }
    }
}

impl AppError {
    pub fn inner(&self) -> &anyhow::Error {
        &self.inner
    }

    pub fn downcast_ref<E: std::error::Error + Send + Sync + 'static>(&self) -> Option<&E> {
        self.inner.downcast_ref::<E>()
    }
}

impl actix_web::error::ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        if let Some(e) = self.downcast_ref::<RemarkError>() {
            match e {
                RemarkError::CommentNotFound => {
                    HttpResponse::NotFound().json(json!({ MESSAGE: e.to_string() }))
                }
                RemarkError::InvalidDateRange
                | RemarkError::InvalidSortField(_)
                | RemarkError::IllegalArgument(_) => {
                    HttpResponse::BadRequest().json(json!({ MESSAGE: e.to_string() }))
                }
                RemarkError::DatabaseError(message) => {
                    tracing::error!("database error: {}", message);
                    HttpResponse::InternalServerError().json(json!({ MESSAGE: e.to_string() }))
                }
            }
        } else {
            tracing::error!("unhandled error: {}", self.inner);
            HttpResponse::InternalServerError()
                .json(json!({ MESSAGE: "Internal server error." }))
        }
    }
}
