use actix_multipart::Multipart;
use actix_web::{HttpResponse, Responder};
use chrono::Utc;
use futures_util::StreamExt;
use log::info;
use serde_json::json;

use common::model::summary::Summary;
use common::requests::UploadResponse;

use super::analyze::analyze_csv;
use crate::storage;

/// HTTP handler wrapper.
///
/// - On success: `201 Created` with `{summary, data}`.
/// - On failure: `400 Bad Request` with `{"error": ...}`; nothing is stored.
pub async fn process(payload: Multipart) -> impl Responder {
    match handle_upload(payload).await {
        Ok(response) => HttpResponse::Created().json(response),
        Err(e) => HttpResponse::BadRequest().json(json!({ "error": e.to_string() })),
    }
}

/// Receives one multipart `file` field, analyzes it and persists the summary
/// row before answering.
async fn handle_upload(
    mut payload: Multipart,
) -> Result<UploadResponse, Box<dyn std::error::Error>> {
    let mut filename = String::new();
    let mut bytes: Vec<u8> = Vec::new();
    let mut file_seen = false;

    while let Some(item) = payload.next().await {
        let mut field = item?;
        let name = field
            .content_disposition()
            .and_then(|cd| cd.get_name().map(|n| n.to_string()));
        if name.as_deref() != Some("file") {
            continue;
        }

        filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename().map(|f| f.to_string()))
            .unwrap_or_default();
        if !filename.ends_with(".csv") {
            return Err("The file must end with .csv".into());
        }

        while let Some(chunk) = field.next().await {
            bytes.extend_from_slice(&chunk?);
        }
        file_seen = true;
    }

    if !file_seen {
        return Err("No file uploaded".into());
    }

    let analysis = analyze_csv(&bytes)?;
    let summary = Summary {
        upload_date: Utc::now().to_rfc3339(),
        filename,
        total_count: analysis.total_count,
        avg_flowrate: analysis.avg_flowrate,
        avg_pressure: analysis.avg_pressure,
        avg_temperature: analysis.avg_temperature,
        equipment_distribution: analysis.equipment_distribution,
    };

    let conn = storage::open()?;
    storage::insert_summary(&conn, &summary)?;
    info!(
        "stored upload {} ({} rows)",
        summary.filename, summary.total_count
    );

    Ok(UploadResponse {
        summary,
        data: analysis.preview,
    })
}
