use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::models::slide::{Slide, SlideType};

/// Aggregate root: a deck and its ordered slides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Presentation {
    pub id: Uuid,
    pub title: String,
    pub topic: String,
    pub slides: Vec<Slide>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// JSON input for `POST /presentations`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePresentationRequest {
    pub title: Option<String>,
    pub topic: Option<String>,
}

/// JSON input for `PUT /presentations/{id}`. Slides stay raw until validated.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PresentationUpdate {
    pub title: Option<String>,
    pub slides: Option<Vec<Value>>,
}

/// JSON input for inserting one slide.
///
/// `slide` carries full slide JSON; otherwise a sample slide of `type` is
/// created, with unknown types treated as `text`. A missing `index` appends
/// and a negative one inserts at the front.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct InsertSlideRequest {
    #[serde(rename = "type")]
    pub slide_type: Option<String>,
    pub index: Option<i64>,
    pub slide: Option<Value>,
}

impl InsertSlideRequest {
    pub fn sample_type(&self) -> SlideType {
        self.slide_type
            .as_deref()
            .and_then(SlideType::parse)
            .unwrap_or(SlideType::Text)
    }

    /// Requested position with negatives clamped to 0.
    pub fn position(&self) -> Option<usize> {
        self.index.map(|i| usize::try_from(i).unwrap_or(0))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MoveSlideRequest {
    pub from: usize,
    pub to: usize,
}

/// Response for slide insertion: the stored deck and where the slide landed.
#[derive(Debug, Clone, Serialize)]
pub struct SlideInserted {
    pub presentation: Presentation,
    pub index: usize,
}

/// Response for slide removal, with the clamped index the editor should show.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideRemoved {
    pub presentation: Presentation,
    pub active_index: Option<usize>,
}
