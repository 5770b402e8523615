use async_trait::async_trait;
use uuid::Uuid;

use super::types::Presentation;
use crate::errors::AppError;

/// Document-store gateway for presentations. One call is one whole-document
/// read or write; a `replace` overwrites everything (last writer wins).
#[async_trait]
pub trait PresentationStore: Send + Sync {
    async fn insert(&self, presentation: &Presentation) -> Result<(), AppError>;

    /// All presentations, newest first.
    async fn find_all(&self) -> Result<Vec<Presentation>, AppError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Presentation>, AppError>;

    /// Overwrite a stored presentation. Returns `false` if it no longer exists.
    async fn replace(&self, presentation: &Presentation) -> Result<bool, AppError>;

    /// Returns `false` if nothing was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, AppError>;
}
