use actix_web::{HttpResponse, Responder};

use common::model::history::HistoryEntry;

use crate::storage;

/// The retained uploads, newest first, as history rows.
pub async fn process() -> impl Responder {
    match load() {
        Ok(entries) => HttpResponse::Ok().json(entries),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error: {}", e)),
    }
}

fn load() -> Result<Vec<HistoryEntry>, Box<dyn std::error::Error>> {
    let conn = storage::open()?;
    Ok(storage::recent_history(&conn)?)
}
