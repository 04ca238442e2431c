//! Bearer token authentication
//!
//! Routes that need a logged-in admin take an [`AuthenticatedAdmin`] guard,
//! which reads `Authorization: Bearer <token>` and verifies the token with
//! the auth service held in managed state.

use super::handlers::AdminState;
use docrepo_domain::value_objects::Claims;
use rocket::http::Status;
use rocket::outcome::Outcome;
use rocket::request::{self, FromRequest, Request};

/// Authorization scheme prefix
const BEARER_PREFIX: &str = "Bearer ";

/// Verified claims of the calling admin
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin(pub Claims);

/// Error type for token authentication failures
#[derive(Debug)]
pub enum TokenAuthError {
    /// No bearer token sent
    Missing,
    /// Token failed verification
    Invalid,
    /// Admin state is not managed
    NotConfigured,
}

/// Extract the token from an `Authorization` header value
pub fn bearer_token(header: &str) -> Option<&str> {
    header
        .strip_prefix(BEARER_PREFIX)
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AuthenticatedAdmin {
    type Error = TokenAuthError;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let Some(state) = request.rocket().state::<AdminState>() else {
            return Outcome::Error((Status::InternalServerError, TokenAuthError::NotConfigured));
        };

        let Some(token) = request
            .headers()
            .get_one("Authorization")
            .and_then(bearer_token)
        else {
            return Outcome::Error((Status::Forbidden, TokenAuthError::Missing));
        };

        match state.auth.validate_token(token) {
            Ok(claims) => Outcome::Success(Self(claims)),
            Err(e) => {
                tracing::debug!(error = %e, "Bearer token rejected");
                Outcome::Error((Status::Forbidden, TokenAuthError::Invalid))
            }
        }
    }
}
