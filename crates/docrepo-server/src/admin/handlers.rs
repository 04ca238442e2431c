//! Admin HTTP handlers
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | `/admin` | POST | Sign up a new admin |
//! | `/admin/login` | POST | Exchange credentials for an access token |
//! | `/admin/me` | GET | Profile of the admin owning the bearer token |

use super::auth::AuthenticatedAdmin;
use super::error::ApiError;
use super::models::SignupRequest;
use docrepo_application::AdminAuthServiceInterface;
use docrepo_domain::entities::{Admin, AdminData, AdminSignIn};
use docrepo_domain::repositories::DocumentRepository;
use docrepo_domain::value_objects::{AccessToken, FieldFilter};
use docrepo_infrastructure::AppContext;
use rocket::http::Status;
use rocket::serde::json::Json;
use rocket::{State, get, post};
use std::sync::Arc;

/// Services shared by the admin handlers
#[derive(Clone)]
pub struct AdminState {
    /// Signup, login and token validation
    pub auth: Arc<dyn AdminAuthServiceInterface>,
    /// Admin lookups
    pub admins: Arc<dyn DocumentRepository<Admin>>,
}

impl AdminState {
    /// Take the services from a built application context
    pub fn from_context(context: &AppContext) -> Self {
        Self {
            auth: context.auth_service(),
            admins: context.admin_repository(),
        }
    }
}

/// Sign up a new admin
///
/// POST /admin
#[post("/", data = "<request>")]
pub async fn sign_up(
    state: &State<AdminState>,
    request: Json<SignupRequest>,
) -> Result<Json<AdminData>, ApiError> {
    let admin = state.auth.sign_up(request.into_inner().into()).await?;
    Ok(Json(AdminData::from(admin)))
}

/// Log in and receive an access token
///
/// POST /admin/login
#[post("/login", data = "<credentials>")]
pub async fn login(
    state: &State<AdminState>,
    credentials: Json<AdminSignIn>,
) -> Result<Json<AccessToken>, ApiError> {
    let token = state
        .auth
        .login(&credentials.username, &credentials.password)
        .await?;
    Ok(Json(token))
}

/// Profile of the calling admin
///
/// GET /admin/me
///
/// # Authentication
///
/// Requires `Authorization: Bearer <access_token>`.
#[get("/me")]
pub async fn me(
    state: &State<AdminState>,
    caller: AuthenticatedAdmin,
) -> Result<Json<AdminData>, ApiError> {
    let AuthenticatedAdmin(claims) = caller;
    let admin = state
        .admins
        .find_by_fields(FieldFilter::new().eq("email", claims.sub.as_str()))
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| ApiError::new(Status::NotFound, "not_found", "Admin no longer exists"))?;
    Ok(Json(AdminData::from(admin)))
}
