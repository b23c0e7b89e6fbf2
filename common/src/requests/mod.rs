use serde::{Deserialize, Serialize};

use crate::model::record::Dataset;
use crate::model::summary::Summary;

/// Response body of a successful upload: the computed summary plus the
/// preview rows the dashboard charts are built from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub summary: Summary,
    pub data: Dataset,
}

/// Credentials for the login endpoint.
#[derive(Debug, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Opaque session token handed back after a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: String,
}
