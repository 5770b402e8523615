use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};

use deckhand::config::AppConfig;
use deckhand::db;
use deckhand::generator::{ContentGenerator, GroqClient, PhotoSearch, UnsplashClient};
use deckhand::handlers;
use deckhand::models::model_asset::{MODELS_URL_PREFIX, ModelStore};

fn startup_error(context: &str, err: impl std::fmt::Display) -> std::io::Error {
    std::io::Error::other(format!("{context}: {err}"))
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env();

    let store = db::init_store(&config)
        .await
        .map_err(|e| startup_error("Failed to initialize presentation store", e))?;

    let models = ModelStore::new(config.models_dir.clone())
        .await
        .map_err(|e| startup_error("Failed to create models directory", e))?;

    let completion = GroqClient::new(
        config.groq_api_url.clone(),
        config.groq_api_key.clone(),
        config.groq_model.clone(),
        config.generation_timeout,
    )
    .map_err(|e| startup_error("Failed to build completion client", e))?;
    if config.groq_api_key.is_empty() {
        log::warn!("GROQ_API_KEY not set, generated decks fall back to placeholder content");
    }

    let photos: Arc<dyn PhotoSearch> = Arc::new(
        UnsplashClient::new(
            config.unsplash_api_url.clone(),
            config.unsplash_access_key.clone(),
            config.generation_timeout,
        )
        .map_err(|e| startup_error("Failed to build photo search client", e))?,
    );

    let store = web::Data::from(store);
    let photos = web::Data::from(photos);
    let generator = web::Data::new(ContentGenerator::new(Arc::new(completion)));
    let models_dir = models.base_path().to_path_buf();
    let models = web::Data::new(models);

    log::info!("Starting server at http://{}", config.bind_addr);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            .app_data(photos.clone())
            .app_data(generator.clone())
            .app_data(models.clone())
            // Uploaded 3D models
            .service(actix_files::Files::new(MODELS_URL_PREFIX, models_dir.clone()))
            .configure(handlers::configure)
            // Default 404 handler (must be registered last)
            .default_service(web::to(handlers::not_found))
    })
    .bind(&config.bind_addr)?
    .run()
    .await
}
