pub mod generation_handlers;
pub mod model_handlers;
pub mod presentation_handlers;
pub mod registry_handlers;

use actix_web::{
    web, Error, HttpResponse,
    body::MessageBody,
    dev::{ServiceRequest, ServiceResponse},
    error::JsonPayloadError,
    middleware::Next,
};

use crate::errors::AppError;
use crate::models::model_asset::MAX_MODEL_BYTES;

/// Rejects POST/PUT requests whose body is not declared as JSON.
/// Bodyless methods pass through.
async fn require_json_content_type(
    req: ServiceRequest,
    next: Next<impl MessageBody + 'static>,
) -> Result<ServiceResponse<impl MessageBody>, Error> {
    let method = req.method().clone();

    if method == actix_web::http::Method::POST || method == actix_web::http::Method::PUT {
        let content_type = req
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if !content_type.starts_with("application/json") {
            let body = serde_json::json!({
                "error": "Content-Type must be application/json"
            });
            let response = HttpResponse::BadRequest().json(body);
            return Ok(req.into_response(response).map_into_right_body());
        }
    }

    next.call(req).await.map(|res| res.map_into_left_body())
}

/// Malformed JSON bodies surface as validation errors with the usual `{"error": ...}` shape.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err: JsonPayloadError, _req| {
        AppError::Validation(format!("Invalid request body: {err}")).into()
    })
}

/// Register every API route.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());
    cfg.service(
        web::scope("/presentations")
            .wrap(actix_web::middleware::from_fn(require_json_content_type))
            .route("", web::get().to(presentation_handlers::list))
            .route("", web::post().to(presentation_handlers::create))
            .route("/{id}", web::get().to(presentation_handlers::read))
            .route("/{id}", web::put().to(presentation_handlers::update))
            .route("/{id}", web::delete().to(presentation_handlers::delete))
            .route("/{id}/slides", web::post().to(presentation_handlers::insert_slide))
            // /slides/move BEFORE /slides/{index}
            .route("/{id}/slides/move", web::post().to(presentation_handlers::move_slide))
            .route("/{id}/slides/{index}", web::delete().to(presentation_handlers::remove_slide)),
    );
    cfg.service(
        web::scope("/slides")
            .wrap(actix_web::middleware::from_fn(require_json_content_type))
            .route("/generate", web::post().to(generation_handlers::generate_slide))
            .route("/generate-image", web::post().to(generation_handlers::generate_image)),
    );
    cfg.service(
        web::scope("/title")
            .wrap(actix_web::middleware::from_fn(require_json_content_type))
            .route("", web::post().to(generation_handlers::generate_title)),
    );
    // Uploads carry the raw file, not JSON.
    cfg.service(
        web::scope("/models")
            .app_data(web::PayloadConfig::new(MAX_MODEL_BYTES))
            .route("", web::get().to(model_handlers::list))
            .route("/upload", web::post().to(model_handlers::upload))
            .route("/{name}", web::delete().to(model_handlers::delete)),
    );
    cfg.route("/themes", web::get().to(registry_handlers::themes));
    cfg.route("/layouts", web::get().to(registry_handlers::layouts));
}

/// JSON 404 for anything no route matched.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({ "error": "Not found" }))
}
