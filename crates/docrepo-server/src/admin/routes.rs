//! Admin router

use super::catchers;
use super::handlers::{self, AdminState};
use rocket::{Build, Rocket};

/// Admin routes, mounted under `/admin`
pub fn admin_routes() -> Vec<rocket::Route> {
    rocket::routes![handlers::sign_up, handlers::login, handlers::me]
}

/// Create the admin rocket instance with default figment
///
/// Routes:
/// - POST `/admin` - Sign up
/// - POST `/admin/login` - Log in
/// - GET `/admin/me` - Current admin (bearer token)
pub fn admin_rocket(state: AdminState) -> Rocket<Build> {
    rocket::build()
        .manage(state)
        .mount("/admin", admin_routes())
        .register(
            "/",
            rocket::catchers![
                catchers::bad_request,
                catchers::forbidden,
                catchers::not_found,
                catchers::unprocessable,
                catchers::internal_error,
            ],
        )
}
