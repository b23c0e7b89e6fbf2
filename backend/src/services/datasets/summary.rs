use actix_web::{HttpResponse, Responder};
use serde_json::json;

use common::model::summary::Summary;

use crate::storage;

/// Latest stored summary, or an empty object when nothing has been uploaded.
pub async fn process() -> impl Responder {
    match latest() {
        Ok(Some(summary)) => HttpResponse::Ok().json(summary),
        Ok(None) => HttpResponse::Ok().json(json!({})),
        Err(e) => HttpResponse::InternalServerError().body(format!("Error: {}", e)),
    }
}

fn latest() -> Result<Option<Summary>, Box<dyn std::error::Error>> {
    let conn = storage::open()?;
    Ok(storage::recent_summaries(&conn)?.into_iter().next())
}
