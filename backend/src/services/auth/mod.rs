//! Login endpoint issuing opaque session tokens.

use actix_web::web::{post, scope};
use actix_web::Scope;

mod login;

const API_PATH: &str = "/api/auth";

/// Configures and returns the Actix scope for the auth routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/login", post().to(login::process))
}
