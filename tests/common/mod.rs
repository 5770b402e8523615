//! Shared test infrastructure for the HTTP API tests.
//!
//! Every test app runs against the in-memory presentation store, a scripted
//! completion client, a canned photo search and a temporary model directory,
//! so no network or database is needed.

#![allow(dead_code)]

use std::sync::Arc;

use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};
use async_trait::async_trait;
use tempfile::TempDir;

use deckhand::errors::AppError;
use deckhand::generator::{CompletionClient, CompletionOptions, ContentGenerator, ImageResult, PhotoSearch};
use deckhand::handlers;
use deckhand::models::model_asset::ModelStore;
use deckhand::models::presentation::{MemoryPresentationStore, PresentationStore};

// ============================================================================
// STUB SERVICES
// ============================================================================

/// Answers outline, slide and title prompts with fixed, well-formed output.
pub struct ScriptedCompletion;

pub const SCRIPTED_OUTLINE: &[&str] = &["Opening", "Numbers", "Next Steps"];
pub const SCRIPTED_TITLE: &str = "Charting the Quarter";

/// Text between the first pair of double quotes after `marker`.
fn quoted_after<'a>(prompt: &'a str, marker: &str) -> Option<&'a str> {
    let rest = &prompt[prompt.find(marker)? + marker.len()..];
    let rest = rest.strip_prefix('"')?;
    rest.split('"').next()
}

#[async_trait]
impl CompletionClient for ScriptedCompletion {
    async fn complete(&self, prompt: &str, _options: CompletionOptions) -> Result<String, AppError> {
        if prompt.contains("presentation outline") {
            return Ok(serde_json::to_string(SCRIPTED_OUTLINE).expect("outline json"));
        }
        if prompt.contains("enclosed with $") {
            return Ok(format!("Sure! Here it is: ${SCRIPTED_TITLE}$"));
        }
        let title = quoted_after(prompt, "slide titled ").unwrap_or("Untitled");
        // The model likes to pick its own theme; the server must not keep it.
        Ok(serde_json::json!({
            "type": "text",
            "content": {
                "title": title,
                "body": format!("Talking points for {title}"),
                "theme": "Dark",
                "layout": "Two Column"
            }
        })
        .to_string())
    }
}

/// One-entry outline, then the given text verbatim for every slide prompt.
pub struct VerbatimSlideCompletion(pub &'static str);

#[async_trait]
impl CompletionClient for VerbatimSlideCompletion {
    async fn complete(&self, prompt: &str, _options: CompletionOptions) -> Result<String, AppError> {
        if prompt.contains("presentation outline") {
            return Ok(r#"["Only"]"#.to_string());
        }
        Ok(self.0.to_string())
    }
}

/// Every call fails the way an unreachable service would.
pub struct FailingCompletion;

#[async_trait]
impl CompletionClient for FailingCompletion {
    async fn complete(&self, _prompt: &str, _options: CompletionOptions) -> Result<String, AppError> {
        Err(AppError::Generation("connection refused".to_string()))
    }
}

/// Finds a photo for anything except the query `nothing`.
pub struct CannedPhotos;

#[async_trait]
impl PhotoSearch for CannedPhotos {
    async fn search(&self, query: &str) -> Result<Option<ImageResult>, AppError> {
        if query == "nothing" {
            return Ok(None);
        }
        Ok(Some(ImageResult {
            src: format!("https://images.example.com/{}.jpg", query.replace(' ', "-")),
            alt: query.to_string(),
            caption: query.to_string(),
        }))
    }
}

// ============================================================================
// APP SETUP
// ============================================================================

/// Shared state behind one test app. Keep it alive for the test's duration:
/// the model directory is removed when it drops.
pub struct TestState {
    pub store: Arc<dyn PresentationStore>,
    pub generator: ContentGenerator,
    pub photos: Arc<dyn PhotoSearch>,
    pub models: ModelStore,
    _models_dir: TempDir,
}

impl TestState {
    pub async fn new() -> Self {
        Self::with_completion(Arc::new(ScriptedCompletion)).await
    }

    pub async fn with_completion(completion: Arc<dyn CompletionClient>) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let models = ModelStore::new(dir.path().join("models"))
            .await
            .expect("Failed to create model store");
        Self {
            store: Arc::new(MemoryPresentationStore::new()),
            generator: ContentGenerator::new(completion),
            photos: Arc::new(CannedPhotos),
            models,
            _models_dir: dir,
        }
    }

    /// App wired the same way `main` wires it, minus logging and static files.
    /// The app owns clones of the shared state, so it does not borrow `self`.
    pub fn app(
        &self,
    ) -> App<
        impl ServiceFactory<
            ServiceRequest,
            Config = (),
            Response = ServiceResponse<impl MessageBody + use<>>,
            Error = actix_web::Error,
            InitError = (),
        > + use<>,
    > {
        App::new()
            .app_data(web::Data::from(self.store.clone()))
            .app_data(web::Data::from(self.photos.clone()))
            .app_data(web::Data::new(self.generator.clone()))
            .app_data(web::Data::new(self.models.clone()))
            .configure(handlers::configure)
            .default_service(web::to(handlers::not_found))
    }
}
