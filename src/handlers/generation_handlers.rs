use actix_web::{web, HttpResponse};
use serde::Deserialize;

use crate::errors::AppError;
use crate::generator::{ContentGenerator, PhotoSearch};

#[derive(Debug, Deserialize)]
pub struct GenerateSlideRequest {
    pub prompt: Option<String>,
    pub topic: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateImageRequest {
    pub prompt: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateTitleRequest {
    pub description: Option<String>,
}

/// Trimmed value of an optional field, `None` when absent or blank.
fn required(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// POST /slides/generate
/// One slide of generated content for the editor to append.
pub async fn generate_slide(
    generator: web::Data<ContentGenerator>,
    body: web::Json<GenerateSlideRequest>,
) -> Result<HttpResponse, AppError> {
    let (Some(prompt), Some(topic)) = (required(&body.prompt), required(&body.topic)) else {
        return Err(AppError::Validation("Prompt and topic are required".to_string()));
    };
    let slide = generator.generate_slide_content(prompt, topic).await?;
    Ok(HttpResponse::Ok().json(slide))
}

/// POST /slides/generate-image
/// First stock photo matching the prompt.
pub async fn generate_image(
    photos: web::Data<dyn PhotoSearch>,
    body: web::Json<GenerateImageRequest>,
) -> Result<HttpResponse, AppError> {
    let Some(prompt) = required(&body.prompt) else {
        return Err(AppError::Validation("Prompt is required".to_string()));
    };
    let image = photos
        .search(prompt)
        .await?
        .ok_or_else(|| AppError::NotFound("Image".to_string()))?;
    Ok(HttpResponse::Ok().json(image))
}

/// POST /title
pub async fn generate_title(
    generator: web::Data<ContentGenerator>,
    body: web::Json<GenerateTitleRequest>,
) -> Result<HttpResponse, AppError> {
    let Some(description) = required(&body.description) else {
        return Err(AppError::Validation("Description is required".to_string()));
    };
    let title = generator.generate_title(description).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({ "title": title })))
}
