//! Mapping of domain errors onto HTTP responses
//!
//! | Domain error | Status |
//! |--------------|--------|
//! | `Conflict` | 409 |
//! | `Authentication` | 403 |
//! | `InvalidArgument` | 422 |
//! | anything else | 500 |

use super::models::ErrorResponse;
use docrepo_domain::error::Error;
use rocket::http::Status;
use rocket::request::Request;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;

/// Error returned by admin handlers
#[derive(Debug)]
pub struct ApiError {
    /// HTTP status
    pub status: Status,
    /// JSON body
    pub body: ErrorResponse,
}

impl ApiError {
    /// Build an error response
    pub fn new(status: Status, error: &str, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorResponse::new(error, message),
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        match err {
            Error::Conflict { message } => Self::new(Status::Conflict, "conflict", message),
            Error::Authentication { message } => {
                Self::new(Status::Forbidden, "authentication_failed", message)
            }
            Error::InvalidArgument { message } => {
                Self::new(Status::UnprocessableEntity, "invalid_argument", message)
            }
            other => {
                tracing::error!(error = %other, "Request failed");
                Self::new(
                    Status::InternalServerError,
                    "internal_error",
                    "Internal server error",
                )
            }
        }
    }
}

impl<'r> Responder<'r, 'static> for ApiError {
    fn respond_to(self, request: &'r Request<'_>) -> response::Result<'static> {
        (self.status, Json(self.body)).respond_to(request)
    }
}
