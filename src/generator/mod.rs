//! Boundary to the language-model and photo-search services.

pub mod completion;
pub mod parse;
pub mod photos;

use std::sync::Arc;

use crate::errors::AppError;
use crate::models::slide::{self, Slide};

pub use completion::{CompletionClient, CompletionOptions, GroqClient};
pub use photos::{ImageResult, PhotoSearch, UnsplashClient};

const TITLE_OPTIONS: CompletionOptions = CompletionOptions { temperature: 0.8, max_tokens: 100 };

fn outline_prompt(title: &str, topic: &str) -> String {
    format!(
        "Create a presentation outline for \"{title}\" about \"{topic}\".\n\
         Return ONLY a JSON array of slide titles. Each title should be descriptive and engaging.\n\
         Example format: [\"Introduction\", \"Key Concepts\", \"Implementation\", \"Results\", \"Conclusion\"]\n\
         Do not include any additional text or explanation."
    )
}

fn slide_prompt(slide_title: &str, topic: &str) -> String {
    format!(
        "Create content for a slide titled \"{slide_title}\" in a presentation about \"{topic}\". \
         Also give a relevant Unsplash image URL for the topic.\n\
         Return ONLY a JSON object with the following structure:\n\
         {{\n  \"type\": \"text\",\n  \"content\": {{\n    \"title\": \"{slide_title}\",\n    \
         \"body\": \"Main content points...\",\n    \"src\": \"url\"\n  }}\n}}\n\
         Do not include any additional text or explanation."
    )
}

fn title_prompt(description: &str) -> String {
    format!(
        "Generate a creative and engaging title for a presentation about: {description}. \
         The title should be concise, memorable, and relevant to the topic. \
         And the title should be enclosed with $ symbol."
    )
}

/// Turns prompts into slide material. Transport failures surface as
/// `AppError::Generation`; unparseable responses degrade to defaults.
#[derive(Clone)]
pub struct ContentGenerator {
    completion: Arc<dyn CompletionClient>,
}

impl ContentGenerator {
    pub fn new(completion: Arc<dyn CompletionClient>) -> Self {
        Self { completion }
    }

    pub async fn generate_outline(&self, title: &str, topic: &str) -> Result<Vec<String>, AppError> {
        let raw = self
            .completion
            .complete(&outline_prompt(title, topic), CompletionOptions::default())
            .await?;
        Ok(parse::parse_outline(&raw))
    }

    /// One normalized slide for `slide_title`. Theme and layout always come out
    /// as the registry defaults.
    pub async fn generate_slide_content(&self, slide_title: &str, topic: &str) -> Result<Slide, AppError> {
        let raw = self
            .completion
            .complete(&slide_prompt(slide_title, topic), CompletionOptions::default())
            .await?;
        Ok(slide::normalize_slide(&parse::parse_slide_content(&raw, slide_title)))
    }

    pub async fn generate_title(&self, description: &str) -> Result<String, AppError> {
        let raw = self.completion.complete(&title_prompt(description), TITLE_OPTIONS).await?;
        parse::parse_title(&raw)
            .ok_or_else(|| AppError::Generation("completion returned no title".to_string()))
    }

    /// Outline plus one slide per outline entry. Never fails: a failed call is
    /// logged and replaced by the default outline or default slide content.
    pub async fn generate_deck(&self, title: &str, topic: &str) -> Vec<Slide> {
        let outline = match self.generate_outline(title, topic).await {
            Ok(outline) => outline,
            Err(e) => {
                log::warn!("Outline generation failed, using default outline: {e}");
                parse::default_outline()
            }
        };

        let mut slides = Vec::with_capacity(outline.len());
        for (index, slide_title) in outline.iter().enumerate() {
            let mut generated = match self.generate_slide_content(slide_title, topic).await {
                Ok(s) => s,
                Err(e) => {
                    log::warn!("Content generation for slide {index} failed, using default: {e}");
                    slide::normalize_slide(&parse::parse_slide_content("", slide_title))
                }
            };
            generated.order = index;
            slides.push(generated);
        }
        slides
    }
}
