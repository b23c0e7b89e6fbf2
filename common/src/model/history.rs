use serde::{Deserialize, Serialize};

/// One row of the upload history table, newest first in API responses.
///
/// History is append-only per upload and replaced wholesale by a clear; the
/// backend keeps only the most recent entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub upload_date: String,
    pub filename: String,
    pub total_count: u64,
    pub avg_flowrate: f64,
}
