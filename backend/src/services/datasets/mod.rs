//! Dataset endpoints: upload, summaries, history, clear and the PDF report.
//!
//! This module provides the HTTP surface the dashboard talks to. Uploads
//! are small sensor exports and are analyzed synchronously; every successful
//! upload both answers with `{summary, data}` and appends a row to the
//! persisted history, which is pruned to the most recent five.
//!
//! The provided routes are:
//! - `POST /api/upload`: multipart upload of one `.csv` file. Parses it,
//!   computes the summary with the server-side column alias tables, stores
//!   the summary row, and returns the summary plus a preview slice of the
//!   rows for the charts.
//! - `GET /api/summary`: the most recent stored summary, `{}` when nothing
//!   has been uploaded yet.
//! - `GET /api/history`: the retained uploads as history rows, newest
//!   first.
//! - `POST /api/clear`: discards all persisted uploads.
//! - `GET /api/report`: a PDF report over the retained summaries, served
//!   inline.

use actix_web::web::{get, post, scope};
use actix_web::Scope;

mod analyze;
mod clear;
mod history;
mod report;
mod summary;
mod upload;

const API_PATH: &str = "/api";

/// Configures and returns the Actix scope for the dataset routes.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        // Route to upload and analyze a new CSV batch.
        .route("/upload", post().to(upload::process))
        // Route to read the latest stored summary.
        .route("/summary", get().to(summary::process))
        // Route to list the retained upload history.
        .route("/history", get().to(history::process))
        // Route to discard all persisted history.
        .route("/clear", post().to(clear::process))
        // Route to download the PDF report.
        .route("/report", get().to(report::process))
}
