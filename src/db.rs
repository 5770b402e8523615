use std::sync::Arc;

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::presentation::{MemoryPresentationStore, PgPresentationStore, PresentationStore};

pub const MIGRATIONS: &str = include_str!("schema.sql");

pub async fn init_pool(database_url: &str, max_connections: u32) -> Result<PgPool, AppError> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await?;
    Ok(pool)
}

pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    sqlx::raw_sql(MIGRATIONS).execute(pool).await?;
    log::info!("Database migrations complete");
    Ok(())
}

/// Build the presentation store the whole process shares: Postgres when a
/// database URL is configured, otherwise the in-memory store.
pub async fn init_store(config: &AppConfig) -> Result<Arc<dyn PresentationStore>, AppError> {
    match &config.database_url {
        Some(url) => {
            let pool = init_pool(url, config.database_max_connections).await?;
            run_migrations(&pool).await?;
            log::info!("Using Postgres presentation store");
            Ok(Arc::new(PgPresentationStore::new(pool)))
        }
        None => {
            log::warn!("DATABASE_URL not set, presentations are kept in memory only");
            Ok(Arc::new(MemoryPresentationStore::new()))
        }
    }
}
