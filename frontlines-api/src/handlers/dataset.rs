use actix_web::{web, HttpResponse};
use shared_types::ErrorResponse;
use std::path::PathBuf;
use tracing::warn;

/// Local JSON document exposed as the static company list.
#[derive(Debug, Clone)]
pub struct DatasetFile {
    pub path: PathBuf,
}

impl DatasetFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// Serves the dataset file as-is; the loader validates the contents.
pub async fn serve_dataset(dataset: web::Data<DatasetFile>) -> HttpResponse {
    match tokio::fs::read(&dataset.path).await {
        Ok(content) => HttpResponse::Ok()
            .content_type("application/json")
            .body(content),
        Err(e) => {
            warn!("Failed to read dataset {}: {}", dataset.path.display(), e);
            HttpResponse::NotFound().json(ErrorResponse::new("Company data is not available"))
        }
    }
}
