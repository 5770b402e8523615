//! Heuristics for turning free-form completion text into structured data.
//!
//! Every function here is pure and total: malformed input degrades to a
//! fallback rather than an error.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{json, Map, Value};

pub const DEFAULT_OUTLINE: &[&str] = &[
    "Introduction",
    "Key Concepts",
    "Implementation",
    "Results",
    "Conclusion",
];

pub const DEFAULT_BODY: &str = "Content will be added here...";

static ARRAY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[([\s\S]*?)\]").expect("valid array regex"));

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$(.*?)\$").expect("valid title regex"));

pub fn default_outline() -> Vec<String> {
    DEFAULT_OUTLINE.iter().map(|s| s.to_string()).collect()
}

/// Strip one leading and one trailing quote character (`"` or `'`).
fn strip_quotes(s: &str) -> &str {
    let s = s.strip_prefix(['"', '\'']).unwrap_or(s);
    s.strip_suffix(['"', '\'']).unwrap_or(s)
}

/// Slide titles from an outline response.
///
/// 1. text that parses as JSON: its elements if it is an array, otherwise
///    nothing;
/// 2. text that does not parse: the first `[...]` span, split on commas,
///    each element trimmed and unquoted;
/// 3. the default outline when the steps above yield no titles.
pub fn parse_outline(raw: &str) -> Vec<String> {
    let parsed: Vec<String> = match serde_json::from_str::<Value>(raw.trim()) {
        Ok(Value::Array(items)) => items
            .into_iter()
            .map(|item| match item {
                Value::String(s) => s,
                other => other.to_string(),
            })
            .filter(|title| !title.is_empty())
            .collect(),
        Ok(_) => Vec::new(),
        Err(_) => ARRAY_RE
            .captures(raw)
            .and_then(|caps| caps.get(1))
            .map(|inner| {
                inner
                    .as_str()
                    .split(',')
                    .map(|part| strip_quotes(part.trim()).to_string())
                    .filter(|title| !title.is_empty())
                    .collect()
            })
            .unwrap_or_default(),
    };

    if parsed.is_empty() { default_outline() } else { parsed }
}

fn non_empty_str<'a>(content: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    content
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Raw slide JSON (`{type, content}`) from a slide-content response.
///
/// The response must parse as a JSON object; otherwise a text slide with the
/// requested title and a placeholder body is returned. The title and body
/// are always filled. Theme and layout are left to the validator.
pub fn parse_slide_content(raw: &str, slide_title: &str) -> Value {
    let parsed = serde_json::from_str::<Value>(raw.trim()).ok();
    let Some(Value::Object(obj)) = parsed else {
        return json!({
            "type": "text",
            "content": { "title": slide_title, "body": DEFAULT_BODY },
        });
    };

    let slide_type = obj
        .get("type")
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or("text");

    let mut content = match obj.get("content") {
        Some(Value::Object(map)) => map.clone(),
        _ => Map::new(),
    };
    let title = non_empty_str(&content, "title").unwrap_or(slide_title).to_string();
    let body = non_empty_str(&content, "body").unwrap_or(DEFAULT_BODY).to_string();
    content.insert("title".to_string(), Value::String(title));
    content.insert("body".to_string(), Value::String(body));
    content.remove("theme");
    content.remove("layout");

    json!({ "type": slide_type, "content": content })
}

/// A title from a title response: the first `$...$` group, else the first
/// non-empty line without surrounding quotes.
pub fn parse_title(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if let Some(title) = TITLE_RE
        .captures(raw)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|t| !t.is_empty())
    {
        return Some(title.to_string());
    }

    raw.lines()
        .map(|line| strip_quotes(line.trim()).trim())
        .find(|line| !line.is_empty())
        .map(str::to_string)
}
