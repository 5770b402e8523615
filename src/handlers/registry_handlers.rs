use actix_web::HttpResponse;

use crate::models::slide::{LAYOUTS, THEMES};

/// GET /themes
pub async fn themes() -> HttpResponse {
    HttpResponse::Ok().json(THEMES)
}

/// GET /layouts
pub async fn layouts() -> HttpResponse {
    HttpResponse::Ok().json(LAYOUTS)
}
