use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    /// Malformed or missing required input.
    Validation(String),
    /// Slide index outside the collection.
    OutOfRange { index: usize, len: usize },
    NotFound(String),
    /// Completion or photo-search service failure.
    Generation(String),
    Db(sqlx::Error),
    Io(std::io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(e) => write!(f, "{e}"),
            AppError::OutOfRange { index, len } => {
                write!(f, "Slide index {index} out of range (slide count {len})")
            }
            AppError::NotFound(what) => write!(f, "{what} not found"),
            AppError::Generation(e) => write!(f, "Generation failed: {e}"),
            AppError::Db(e) => write!(f, "Database error: {e}"),
            AppError::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for AppError {}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) | AppError::OutOfRange { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = |msg: String| serde_json::json!({ "error": msg });
        match self {
            AppError::Validation(_) | AppError::OutOfRange { .. } => {
                HttpResponse::BadRequest().json(body(self.to_string()))
            }
            AppError::NotFound(_) => HttpResponse::NotFound().json(body(self.to_string())),
            AppError::Generation(_) => {
                log::error!("{self}");
                HttpResponse::InternalServerError().json(body("Failed to generate content".to_string()))
            }
            _ => {
                log::error!("{self}");
                HttpResponse::InternalServerError().json(body("Internal Server Error".to_string()))
            }
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::Db(e)
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e)
    }
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AppError::Generation("request timed out".to_string())
        } else {
            AppError::Generation(e.to_string())
        }
    }
}
