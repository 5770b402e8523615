use chrono::Utc;
use serde_json::Value;
use uuid::Uuid;

use super::types::Presentation;
use crate::errors::AppError;
use crate::models::slide::{self, validate::dedupe_ids, Slide};

fn require_non_empty(value: &str, field_name: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!("{field_name} is required")));
    }
    Ok(())
}

impl Presentation {
    /// Build a new deck from already-normalized slides.
    pub fn new(title: &str, topic: &str, mut slides: Vec<Slide>) -> Result<Self, AppError> {
        require_non_empty(title, "Title")?;
        require_non_empty(topic, "Topic")?;

        dedupe_ids(&mut slides);
        slide::renumber(&mut slides);

        let now = Utc::now();
        Ok(Presentation {
            id: Uuid::new_v4(),
            title: title.to_string(),
            topic: topic.to_string(),
            slides,
            created_at: now,
            updated_at: now,
        })
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now().max(self.updated_at);
    }

    /// Replace the whole slide collection. Nothing changes unless every slide validates.
    pub fn replace_slides(&mut self, raw_slides: &[Value]) -> Result<(), AppError> {
        let slides = slide::normalize_collection(raw_slides)?;
        self.set_slides(slides);
        Ok(())
    }

    /// Install a collection that has already been through `normalize_collection`.
    pub fn set_slides(&mut self, slides: Vec<Slide>) {
        self.slides = slides;
        self.touch();
    }

    pub fn rename(&mut self, title: &str) -> Result<(), AppError> {
        require_non_empty(title, "Title")?;
        self.title = title.to_string();
        self.touch();
        Ok(())
    }

    /// Insert a slide at `index` (appending when `None`). A slide whose id is
    /// already taken in this deck gets a fresh one.
    pub fn insert_slide(&mut self, index: Option<usize>, mut new_slide: Slide) -> usize {
        if self.slides.iter().any(|s| s.id == new_slide.id) {
            new_slide.id = Uuid::new_v4().to_string();
        }
        let index = index.unwrap_or(self.slides.len());
        let at = slide::insert_at(&mut self.slides, index, new_slide);
        self.touch();
        at
    }

    pub fn remove_slide(&mut self, index: usize) -> Result<Slide, AppError> {
        let removed = slide::remove_at(&mut self.slides, index)?;
        self.touch();
        Ok(removed)
    }

    pub fn move_slide(&mut self, from: usize, to: usize) -> Result<usize, AppError> {
        let at = slide::move_to(&mut self.slides, from, to)?;
        self.touch();
        Ok(at)
    }
}
