use std::collections::HashSet;

use serde_json::{Map, Value};
use uuid::Uuid;

use super::registry::{resolve_layout, resolve_theme};
use super::reorder::renumber;
use super::types::*;
use crate::errors::AppError;

/// Content keys with a fixed meaning. They must be strings (or null) when present.
const KNOWN_CONTENT_KEYS: &[&str] = &[
    "title", "body", "src", "alt", "caption", "modelUrl", "theme", "layout",
];

fn new_slide_id() -> String {
    Uuid::new_v4().to_string()
}

/// Remove `key` from the map and return it if it holds a string.
/// Non-string values are dropped.
fn take_str(map: &mut Map<String, Value>, key: &str) -> Option<String> {
    match map.remove(key) {
        Some(Value::String(s)) => Some(s),
        _ => None,
    }
}

fn build_content(slide_type: SlideType, mut map: Map<String, Value>) -> SlideContent {
    // Known keys the variant does not consume stay in `extra`, so they must
    // already satisfy `validate_slide`.
    map.retain(|key, value| value.is_string() || !KNOWN_CONTENT_KEYS.contains(&key.as_str()));
    let theme = resolve_theme(take_str(&mut map, "theme").as_deref()).to_string();
    let layout = resolve_layout(take_str(&mut map, "layout").as_deref()).to_string();

    match slide_type {
        SlideType::Text => {
            let title = take_str(&mut map, "title");
            let body = take_str(&mut map, "body");
            SlideContent::Text(TextContent { title, body, theme, layout, extra: map })
        }
        SlideType::Image => {
            let src = take_str(&mut map, "src");
            let alt = take_str(&mut map, "alt");
            let caption = take_str(&mut map, "caption");
            SlideContent::Image(ImageContent { src, alt, caption, theme, layout, extra: map })
        }
        SlideType::Model3d => {
            let model_url = take_str(&mut map, "modelUrl");
            let caption = take_str(&mut map, "caption");
            SlideContent::Model3d(ModelContent { model_url, caption, theme, layout, extra: map })
        }
    }
}

/// Incoming `order` if it is a non-negative integer.
fn incoming_order(raw: &Value) -> Option<u64> {
    raw.get("order").and_then(Value::as_u64)
}

/// Turn any slide-like JSON value into a usable slide. Never fails.
///
/// - unknown or missing `type` becomes `text`
/// - missing or unknown `theme`/`layout` become `Default`/`Centered`
/// - content fields the variant does not use are kept as-is
/// - a missing or empty `id` gets a fresh UUID
pub fn normalize_slide(raw: &Value) -> Slide {
    let id = raw
        .get("id")
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
        .map(str::to_string)
        .unwrap_or_else(new_slide_id);

    let slide_type = raw
        .get("type")
        .and_then(Value::as_str)
        .and_then(SlideType::parse)
        .unwrap_or(SlideType::Text);

    let content_map = match raw.get("content") {
        Some(Value::Object(map)) => map.clone(),
        _ => Map::new(),
    };

    let order = incoming_order(raw).map_or(0, |o| o as usize);

    Slide {
        id,
        content: build_content(slide_type, content_map),
        order,
    }
}

/// Reject input that is not shaped like a slide, then normalize it.
///
/// A slide is structurally invalid when it is not an object, when `id` or
/// `type` is present but not a string, when `order` is present but not a
/// non-negative integer, when `content` is present but not an object, or when
/// a known content field holds something other than a string.
pub fn validate_slide(raw: &Value) -> Result<Slide, AppError> {
    let obj = raw
        .as_object()
        .ok_or_else(|| AppError::Validation("Slide must be a JSON object".to_string()))?;

    for key in ["id", "type"] {
        if let Some(v) = obj.get(key) {
            if !v.is_string() && !v.is_null() {
                return Err(AppError::Validation(format!("Slide field '{key}' must be a string")));
            }
        }
    }

    if let Some(order) = obj.get("order") {
        if !order.is_null() && order.as_u64().is_none() {
            return Err(AppError::Validation(
                "Slide field 'order' must be a non-negative integer".to_string(),
            ));
        }
    }

    match obj.get("content") {
        None | Some(Value::Null) => {}
        Some(Value::Object(content)) => {
            for key in KNOWN_CONTENT_KEYS {
                if let Some(v) = content.get(*key) {
                    if !v.is_string() && !v.is_null() {
                        return Err(AppError::Validation(format!(
                            "Slide content field '{key}' must be a string"
                        )));
                    }
                }
            }
        }
        Some(_) => {
            return Err(AppError::Validation("Slide content must be a JSON object".to_string()));
        }
    }

    Ok(normalize_slide(raw))
}

/// Give every slide in the collection a distinct id, replacing repeats.
pub fn dedupe_ids(slides: &mut [Slide]) {
    let mut seen = HashSet::with_capacity(slides.len());
    for slide in slides.iter_mut() {
        while !seen.insert(slide.id.clone()) {
            slide.id = new_slide_id();
        }
    }
}

/// Validate and normalize a whole incoming collection.
///
/// All-or-nothing: the first invalid slide fails the call. Slides are ranked
/// by their incoming `order` (falling back to array position), ids are made
/// unique and `order` is rewritten to the positional index.
pub fn normalize_collection(raws: &[Value]) -> Result<Vec<Slide>, AppError> {
    let mut ranked = Vec::with_capacity(raws.len());
    for (position, raw) in raws.iter().enumerate() {
        let slide = validate_slide(raw)
            .map_err(|e| AppError::Validation(format!("Slide {position}: {e}")))?;
        let rank = incoming_order(raw).unwrap_or(position as u64);
        ranked.push((rank, slide));
    }

    // Stable: equal ranks keep array order.
    ranked.sort_by_key(|(rank, _)| *rank);

    let mut slides: Vec<Slide> = ranked.into_iter().map(|(_, slide)| slide).collect();
    dedupe_ids(&mut slides);
    renumber(&mut slides);
    Ok(slides)
}

/// Sample content the editor puts on a freshly added slide of the given type.
pub fn sample_slide(slide_type: SlideType) -> Slide {
    let content = match slide_type {
        SlideType::Text => serde_json::json!({
            "title": "New Slide Title",
            "body": "Add your content here. This is a sample text slide. You can edit this content in the slide editor.",
        }),
        SlideType::Image => serde_json::json!({
            "src": "",
            "alt": "Image description",
            "caption": "Add a caption for your image here",
        }),
        SlideType::Model3d => serde_json::json!({
            "modelUrl": "",
            "caption": "Add a caption for your 3D model here",
        }),
    };
    normalize_slide(&serde_json::json!({
        "type": slide_type.as_str(),
        "content": content,
    }))
}
