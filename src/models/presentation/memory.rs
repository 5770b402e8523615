use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::store::PresentationStore;
use super::types::Presentation;
use crate::errors::AppError;

/// Process-local store used when no `DATABASE_URL` is configured, and in tests.
/// Contents are lost on restart.
#[derive(Debug, Default)]
pub struct MemoryPresentationStore {
    docs: RwLock<HashMap<Uuid, Presentation>>,
}

impl MemoryPresentationStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PresentationStore for MemoryPresentationStore {
    async fn insert(&self, presentation: &Presentation) -> Result<(), AppError> {
        self.docs
            .write()
            .await
            .insert(presentation.id, presentation.clone());
        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Presentation>, AppError> {
        let mut all: Vec<Presentation> = self.docs.read().await.values().cloned().collect();
        all.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
        Ok(all)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Presentation>, AppError> {
        Ok(self.docs.read().await.get(&id).cloned())
    }

    async fn replace(&self, presentation: &Presentation) -> Result<bool, AppError> {
        let mut docs = self.docs.write().await;
        match docs.get_mut(&presentation.id) {
            Some(existing) => {
                *existing = presentation.clone();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.docs.write().await.remove(&id).is_some())
    }
}
