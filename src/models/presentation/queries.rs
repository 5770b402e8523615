use uuid::Uuid;

use super::store::PresentationStore;
use super::types::*;
use crate::errors::AppError;
use crate::models::slide::{self, Slide};

fn not_found() -> AppError {
    AppError::NotFound("Presentation".to_string())
}

/// Parse a path identifier. Malformed ids are a validation error.
pub fn parse_id(raw: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(raw.trim())
        .map_err(|_| AppError::Validation("Invalid presentation ID".to_string()))
}

/// Create and store a presentation from normalized slides.
pub async fn create(
    store: &dyn PresentationStore,
    title: &str,
    topic: &str,
    slides: Vec<Slide>,
) -> Result<Presentation, AppError> {
    let presentation = Presentation::new(title, topic, slides)?;
    store.insert(&presentation).await?;
    log::info!(
        "Created presentation {} ({} slides)",
        presentation.id,
        presentation.slides.len()
    );
    Ok(presentation)
}

pub async fn find_all(store: &dyn PresentationStore) -> Result<Vec<Presentation>, AppError> {
    store.find_all().await
}

pub async fn find_by_id(store: &dyn PresentationStore, id: Uuid) -> Result<Presentation, AppError> {
    store.find_by_id(id).await?.ok_or_else(not_found)
}

/// Load, mutate, write back. The closure runs on the loaded aggregate; if it
/// fails nothing is written.
async fn modify<T>(
    store: &dyn PresentationStore,
    id: Uuid,
    change: impl FnOnce(&mut Presentation) -> Result<T, AppError>,
) -> Result<(Presentation, T), AppError> {
    let mut presentation = find_by_id(store, id).await?;
    let outcome = change(&mut presentation)?;
    if !store.replace(&presentation).await? {
        return Err(not_found());
    }
    Ok((presentation, outcome))
}

/// Partial update: title and/or the full slide collection, written together.
///
/// Nothing is written unless both inputs validate.
pub async fn update(
    store: &dyn PresentationStore,
    id: Uuid,
    changes: &PresentationUpdate,
) -> Result<Presentation, AppError> {
    if changes.title.is_none() && changes.slides.is_none() {
        return find_by_id(store, id).await;
    }

    let (presentation, ()) = modify(store, id, |p| {
        if let Some(title) = &changes.title {
            p.rename(title)?;
        }
        if let Some(raw_slides) = &changes.slides {
            p.replace_slides(raw_slides)?;
        }
        Ok(())
    })
    .await?;

    log::info!("Updated presentation {id}");
    Ok(presentation)
}

pub async fn update_slides(
    store: &dyn PresentationStore,
    id: Uuid,
    new_slides: Vec<serde_json::Value>,
) -> Result<Presentation, AppError> {
    let changes = PresentationUpdate { title: None, slides: Some(new_slides) };
    update(store, id, &changes).await
}

pub async fn update_title(
    store: &dyn PresentationStore,
    id: Uuid,
    new_title: &str,
) -> Result<Presentation, AppError> {
    let changes = PresentationUpdate { title: Some(new_title.to_string()), slides: None };
    update(store, id, &changes).await
}

pub async fn delete(store: &dyn PresentationStore, id: Uuid) -> Result<(), AppError> {
    if !store.delete(id).await? {
        return Err(not_found());
    }
    log::info!("Deleted presentation {id}");
    Ok(())
}

pub async fn insert_slide(
    store: &dyn PresentationStore,
    id: Uuid,
    request: &InsertSlideRequest,
) -> Result<SlideInserted, AppError> {
    let new_slide = match &request.slide {
        Some(raw) => slide::validate_slide(raw)?,
        None => slide::sample_slide(request.sample_type()),
    };
    let (presentation, index) =
        modify(store, id, |p| Ok(p.insert_slide(request.position(), new_slide))).await?;
    Ok(SlideInserted { presentation, index })
}

pub async fn remove_slide(
    store: &dyn PresentationStore,
    id: Uuid,
    index: usize,
) -> Result<SlideRemoved, AppError> {
    let (presentation, _removed) = modify(store, id, |p| p.remove_slide(index)).await?;
    let active_index = slide::clamp_active(index, presentation.slides.len());
    Ok(SlideRemoved { presentation, active_index })
}

pub async fn move_slide(
    store: &dyn PresentationStore,
    id: Uuid,
    from: usize,
    to: usize,
) -> Result<Presentation, AppError> {
    let (presentation, _) = modify(store, id, |p| p.move_slide(from, to)).await?;
    Ok(presentation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::presentation::MemoryPresentationStore;
    use crate::models::slide::SlideType;
    use serde_json::json;

    #[test]
    fn test_parse_id() {
        assert!(parse_id("not-a-uuid").is_err());
        let id = Uuid::new_v4();
        assert_eq!(parse_id(&id.to_string()).unwrap(), id);
    }

    #[tokio::test]
    async fn test_update_with_invalid_slide_leaves_store_unchanged() {
        let store = MemoryPresentationStore::new();
        let created = create(&store, "Deck", "Topic", vec![slide::sample_slide(SlideType::Text)])
            .await
            .unwrap();

        let result = update_slides(
            &store,
            created.id,
            vec![json!({"type": "image"}), json!({"content": []})],
        )
        .await;
        assert!(matches!(result, Err(AppError::Validation(_))));
        assert_eq!(find_by_id(&store, created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn test_update_title_and_slides_together() {
        let store = MemoryPresentationStore::new();
        let created = create(&store, "Deck", "Topic", vec![]).await.unwrap();
        let changes = PresentationUpdate {
            title: Some("Renamed".to_string()),
            slides: Some(vec![json!({"content": {"title": "One"}})]),
        };
        let updated = update(&store, created.id, &changes).await.unwrap();
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.slides.len(), 1);
        assert_eq!(find_by_id(&store, created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let store = MemoryPresentationStore::new();
        let result = update_title(&store, Uuid::new_v4(), "Title").await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_insert_clamps_negative_index_and_defaults_unknown_type() {
        let store = MemoryPresentationStore::new();
        let created = create(&store, "Deck", "Topic", vec![slide::sample_slide(SlideType::Image)])
            .await
            .unwrap();

        let request: InsertSlideRequest =
            serde_json::from_value(json!({"type": "video", "index": -3})).unwrap();
        let inserted = insert_slide(&store, created.id, &request).await.unwrap();

        assert_eq!(inserted.index, 0);
        assert_eq!(inserted.presentation.slides[0].slide_type(), SlideType::Text);
        assert_eq!(inserted.presentation.slides[1].slide_type(), SlideType::Image);
        assert_eq!(inserted.presentation.slides[1].order, 1);
    }

    #[tokio::test]
    async fn test_remove_last_slide_clamps_active_index() {
        let store = MemoryPresentationStore::new();
        let slides = vec![
            slide::sample_slide(SlideType::Text),
            slide::sample_slide(SlideType::Image),
        ];
        let created = create(&store, "Deck", "Topic", slides).await.unwrap();

        let removed = remove_slide(&store, created.id, 1).await.unwrap();
        assert_eq!(removed.active_index, Some(0));
        let removed = remove_slide(&store, created.id, 0).await.unwrap();
        assert_eq!(removed.active_index, None);
        assert!(matches!(
            remove_slide(&store, created.id, 0).await,
            Err(AppError::OutOfRange { .. })
        ));
    }
}
