use actix_web::{HttpResponse, Responder};
use log::info;
use serde_json::json;

use crate::storage;

/// Discards all persisted uploads. The dashboard resets its own state after
/// a successful clear; a failed clear must leave everything in place.
pub async fn process() -> impl Responder {
    match clear() {
        Ok(()) => HttpResponse::Ok().json(json!({ "message": "History cleared" })),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error: {}", e)),
    }
}

fn clear() -> Result<(), Box<dyn std::error::Error>> {
    let conn = storage::open()?;
    storage::clear_uploads(&conn)?;
    info!("upload history cleared");
    Ok(())
}
