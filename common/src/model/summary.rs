use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Aggregate statistics the server computes for one uploaded dataset.
///
/// Produced by the backend at upload time, persisted there, and treated as an
/// opaque input by the dashboard: the frontend only projects it (stat tiles,
/// equipment share chart), it never recomputes any of these values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// RFC 3339 timestamp of the upload.
    pub upload_date: String,
    /// Name of the uploaded file.
    pub filename: String,
    /// Number of data rows in the file (not just the preview slice).
    pub total_count: u64,
    pub avg_flowrate: f64,
    pub avg_pressure: f64,
    pub avg_temperature: f64,
    /// Count per equipment type. `None` when the file had no type-like
    /// column at all; consumers must render nothing in that case rather
    /// than an empty chart.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equipment_distribution: Option<BTreeMap<String, u64>>,
}
