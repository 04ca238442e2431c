//! JSON error catchers
//!
//! Keep the `{error, message}` body for failures raised by Rocket itself
//! (malformed JSON, failed guards, unknown routes).

use super::models::ErrorResponse;
use rocket::serde::json::Json;
use rocket::{Request, catch};

#[catch(400)]
pub fn bad_request(_request: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::new("bad_request", "Malformed request"))
}

#[catch(403)]
pub fn forbidden(_request: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::new("forbidden", "Invalid or missing access token"))
}

#[catch(404)]
pub fn not_found(_request: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::new("not_found", "Resource not found"))
}

#[catch(422)]
pub fn unprocessable(_request: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::new(
        "invalid_argument",
        "Request body does not match the expected shape",
    ))
}

#[catch(500)]
pub fn internal_error(_request: &Request<'_>) -> Json<ErrorResponse> {
    Json(ErrorResponse::new("internal_error", "Internal server error"))
}
