use actix_web::{web, HttpResponse, Responder};
use chrono::Utc;
use log::warn;
use serde_json::json;

use common::requests::{LoginRequest, LoginResponse};

use crate::storage;

/// `200` with `{token, user}` on valid credentials, `400` otherwise.
pub async fn process(req: web::Json<LoginRequest>) -> impl Responder {
    match login(req.into_inner()) {
        Ok(Some(response)) => HttpResponse::Ok().json(response),
        Ok(None) => HttpResponse::BadRequest().json(json!({ "error": "Invalid credentials" })),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error: {}", e)),
    }
}

/// Verifies the password hash and mints a fresh session token.
fn login(req: LoginRequest) -> Result<Option<LoginResponse>, Box<dyn std::error::Error>> {
    let conn = storage::open()?;
    let Some(stored) = storage::password_md5(&conn, &req.username)? else {
        return Ok(None);
    };
    if stored != format!("{:x}", md5::compute(req.password.as_bytes())) {
        warn!("rejected login for {}", req.username);
        return Ok(None);
    }

    let token = uuid::Uuid::new_v4().to_string();
    storage::store_session(&conn, &token, &req.username, &Utc::now().to_rfc3339())?;
    Ok(Some(LoginResponse {
        token,
        user: req.username,
    }))
}
