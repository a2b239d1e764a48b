use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::domain::download::DownloadService;

/// Request for POST /api/download
#[derive(Debug, Serialize, Deserialize)]
pub struct DownloadRequest {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DownloadResponse {
    pub saved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

pub struct DownloadController {
    downloads: Arc<DownloadService>,
}

impl DownloadController {
    pub fn new(downloads: Arc<DownloadService>) -> Self {
        Self { downloads }
    }

    /// POST /api/download - Save an audio resource to the downloads directory
    pub async fn download(
        State(controller): State<Arc<DownloadController>>,
        Json(request): Json<DownloadRequest>,
    ) -> Json<DownloadResponse> {
        let saved = controller
            .downloads
            .download(&request.url, request.filename.as_deref())
            .await;

        Json(DownloadResponse {
            saved: saved.is_some(),
            path: saved.map(|p| p.display().to_string()),
        })
    }
}
