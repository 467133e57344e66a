// Upload preview: what the upload card shows once a file is picked.

use axum::Json;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::formatting::format_file_size;

#[derive(Debug, Deserialize)]
pub struct UploadPreviewRequest {
    pub filename: String,
    pub size_bytes: u64,
    /// Optional display name; blank falls back to the filename.
    pub name: Option<String>,
}

#[derive(Debug, Serialize, PartialEq)]
pub struct UploadPreview {
    pub filename: String,
    pub display_size: String,
    pub resolved_name: String,
}

pub fn resolve_display_name(filename: &str, name: Option<&str>) -> String {
    name.map(str::trim)
        .filter(|n| !n.is_empty())
        .unwrap_or(filename)
        .to_string()
}

pub fn build_upload_preview(filename: &str, size_bytes: u64, name: Option<&str>) -> UploadPreview {
    UploadPreview {
        filename: filename.to_string(),
        display_size: format_file_size(size_bytes),
        resolved_name: resolve_display_name(filename, name),
    }
}

/// POST /api/v1/uploads/preview
pub async fn handle_upload_preview(
    Json(req): Json<UploadPreviewRequest>,
) -> Result<Json<UploadPreview>, AppError> {
    if req.filename.trim().is_empty() {
        return Err(AppError::Validation("filename must not be empty".to_string()));
    }
    Ok(Json(build_upload_preview(
        &req.filename,
        req.size_bytes,
        req.name.as_deref(),
    )))
}
