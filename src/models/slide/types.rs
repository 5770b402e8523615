use serde::de::{self, Deserializer};
use serde::ser::{SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Closed set of slide kinds. The wire names are `text`, `image` and `3d`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlideType {
    #[serde(rename = "text")]
    Text,
    #[serde(rename = "image")]
    Image,
    #[serde(rename = "3d")]
    Model3d,
}

impl SlideType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SlideType::Text => "text",
            SlideType::Image => "image",
            SlideType::Model3d => "3d",
        }
    }

    /// Parse a wire name. Unknown names yield `None`; callers decide the fallback.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "text" => Some(SlideType::Text),
            "image" => Some(SlideType::Image),
            "3d" => Some(SlideType::Model3d),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    pub theme: String,
    pub layout: String,
    /// Fields this variant does not know about, kept verbatim.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub theme: String,
    pub layout: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub theme: String,
    pub layout: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Slide payload, discriminated by the slide's `type`.
#[derive(Debug, Clone, PartialEq)]
pub enum SlideContent {
    Text(TextContent),
    Image(ImageContent),
    Model3d(ModelContent),
}

impl SlideContent {
    pub fn slide_type(&self) -> SlideType {
        match self {
            SlideContent::Text(_) => SlideType::Text,
            SlideContent::Image(_) => SlideType::Image,
            SlideContent::Model3d(_) => SlideType::Model3d,
        }
    }

    pub fn theme(&self) -> &str {
        match self {
            SlideContent::Text(c) => &c.theme,
            SlideContent::Image(c) => &c.theme,
            SlideContent::Model3d(c) => &c.theme,
        }
    }

    pub fn layout(&self) -> &str {
        match self {
            SlideContent::Text(c) => &c.layout,
            SlideContent::Image(c) => &c.layout,
            SlideContent::Model3d(c) => &c.layout,
        }
    }
}

/// One slide of a presentation.
///
/// Serialized as `{id, type, content, order}`. Deserialization goes through
/// the validator, so a `Slide` obtained from JSON is always normalized.
#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub id: String,
    pub content: SlideContent,
    pub order: usize,
}

impl Slide {
    pub fn slide_type(&self) -> SlideType {
        self.content.slide_type()
    }
}

impl Serialize for Slide {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("Slide", 4)?;
        s.serialize_field("id", &self.id)?;
        s.serialize_field("type", &self.slide_type())?;
        match &self.content {
            SlideContent::Text(c) => s.serialize_field("content", c)?,
            SlideContent::Image(c) => s.serialize_field("content", c)?,
            SlideContent::Model3d(c) => s.serialize_field("content", c)?,
        }
        s.serialize_field("order", &self.order)?;
        s.end()
    }
}

impl<'de> Deserialize<'de> for Slide {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Value::deserialize(deserializer)?;
        super::validate::validate_slide(&raw).map_err(de::Error::custom)
    }
}
