use actix_web::{web, HttpResponse};

use crate::errors::AppError;
use crate::generator::ContentGenerator;
use crate::models::presentation::{
    self, CreatePresentationRequest, InsertSlideRequest, MoveSlideRequest, PresentationStore,
    PresentationUpdate,
};

pub type Store = web::Data<dyn PresentationStore>;

/// POST /presentations
/// Generates an outline and slide content for the deck, then stores it.
pub async fn create(
    store: Store,
    generator: web::Data<ContentGenerator>,
    body: web::Json<CreatePresentationRequest>,
) -> Result<HttpResponse, AppError> {
    let title = body.title.as_deref().map(str::trim).unwrap_or("");
    let topic = body.topic.as_deref().map(str::trim).unwrap_or("");
    if title.is_empty() || topic.is_empty() {
        return Err(AppError::Validation("Title and topic are required".to_string()));
    }

    let slides = generator.generate_deck(title, topic).await;
    let created = presentation::create(store.get_ref(), title, topic, slides).await?;

    Ok(HttpResponse::Created().json(created))
}

/// GET /presentations
/// All presentations, newest first.
pub async fn list(store: Store) -> Result<HttpResponse, AppError> {
    let all = presentation::find_all(store.get_ref()).await?;
    Ok(HttpResponse::Ok().json(all))
}

/// GET /presentations/{id}
pub async fn read(store: Store, path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let id = presentation::parse_id(&path)?;
    let found = presentation::find_by_id(store.get_ref(), id).await?;
    Ok(HttpResponse::Ok().json(found))
}

/// PUT /presentations/{id}
/// Partial update of title and/or the whole slide collection.
pub async fn update(
    store: Store,
    path: web::Path<String>,
    body: web::Json<PresentationUpdate>,
) -> Result<HttpResponse, AppError> {
    let id = presentation::parse_id(&path)?;
    let updated = presentation::update(store.get_ref(), id, &body).await?;
    Ok(HttpResponse::Ok().json(updated))
}

/// DELETE /presentations/{id}
/// An id that cannot name a presentation is reported as not found.
pub async fn delete(store: Store, path: web::Path<String>) -> Result<HttpResponse, AppError> {
    let id = presentation::parse_id(&path)
        .map_err(|_| AppError::NotFound("Presentation".to_string()))?;
    presentation::delete(store.get_ref(), id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Presentation deleted successfully"
    })))
}

/// POST /presentations/{id}/slides
/// Inserts a slide (sample content of the requested type unless a slide is given).
pub async fn insert_slide(
    store: Store,
    path: web::Path<String>,
    body: web::Json<InsertSlideRequest>,
) -> Result<HttpResponse, AppError> {
    let id = presentation::parse_id(&path)?;
    let inserted = presentation::insert_slide(store.get_ref(), id, &body).await?;
    Ok(HttpResponse::Created().json(inserted))
}

/// A slide index from the path. Anything that is not a non-negative integer
/// can never address a slide.
fn parse_index(raw: &str) -> Result<usize, AppError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| AppError::Validation(format!("Slide index {raw} out of range")))
}

/// DELETE /presentations/{id}/slides/{index}
pub async fn remove_slide(
    store: Store,
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (raw_id, raw_index) = path.into_inner();
    let id = presentation::parse_id(&raw_id)?;
    let index = parse_index(&raw_index)?;
    let removed = presentation::remove_slide(store.get_ref(), id, index).await?;
    Ok(HttpResponse::Ok().json(removed))
}

/// POST /presentations/{id}/slides/move
pub async fn move_slide(
    store: Store,
    path: web::Path<String>,
    body: web::Json<MoveSlideRequest>,
) -> Result<HttpResponse, AppError> {
    let id = presentation::parse_id(&path)?;
    let moved = presentation::move_slide(store.get_ref(), id, body.from, body.to).await?;
    Ok(HttpResponse::Ok().json(moved))
}
