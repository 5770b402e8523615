use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::model_asset::ModelStore;

#[derive(Debug, Deserialize)]
pub struct UploadQuery {
    pub filename: Option<String>,
}

/// GET /models
pub async fn list(models: web::Data<ModelStore>) -> Result<HttpResponse, AppError> {
    Ok(HttpResponse::Ok().json(models.list().await?))
}

/// POST /models/upload?filename=duck.glb
/// The request body is the raw file.
pub async fn upload(
    models: web::Data<ModelStore>,
    query: web::Query<UploadQuery>,
    body: web::Bytes,
) -> Result<HttpResponse, AppError> {
    let filename = query
        .filename
        .as_deref()
        .filter(|f| !f.trim().is_empty())
        .ok_or_else(|| AppError::Validation("filename is required".to_string()))?;
    let asset = models.upload(filename.trim(), &body).await?;
    Ok(HttpResponse::Created().json(asset))
}

/// DELETE /models/{name}
pub async fn delete(
    models: web::Data<ModelStore>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    models.delete(&path).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "success": true })))
}
