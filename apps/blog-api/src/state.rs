//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ports::BlogPostRepository;
use blog_infra::{DatabaseConfig, InMemoryBlogPostRepository};

#[cfg(feature = "postgres")]
use blog_infra::{DatabasePool, DbErr, PostgresBlogPostRepository};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogposts: Arc<dyn BlogPostRepository>,
    #[cfg(feature = "postgres")]
    pub db: Option<Arc<DatabasePool>>,
}

impl AppState {
    /// Build the application state, falling back to the in-memory store
    /// when the database is not configured or unreachable.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        #[cfg(feature = "postgres")]
        let state = match db_config {
            Some(config) => match Self::connect(config).await {
                Ok(state) => state,
                Err(e) => {
                    tracing::error!(
                        "Failed to connect to database: {}. Using in-memory fallback.",
                        e
                    );
                    Self::in_memory()
                }
            },
            None => {
                tracing::warn!("DATABASE_URL not set. Running without database (in-memory mode).");
                Self::in_memory()
            }
        };

        #[cfg(not(feature = "postgres"))]
        let state = {
            let _ = db_config;
            tracing::info!("Running without postgres feature - using in-memory repository");
            Self::in_memory()
        };

        tracing::info!("Application state initialized");
        state
    }

    /// Connect to PostgreSQL. Unlike [`AppState::new`], a connection failure
    /// is returned to the caller.
    #[cfg(feature = "postgres")]
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let pool = Arc::new(DatabasePool::init(config).await?);
        let repo = Arc::new(PostgresBlogPostRepository::new(Arc::clone(&pool.conn)));

        Ok(Self {
            blogposts: repo,
            db: Some(pool),
        })
    }

    /// State backed by a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::with_repository(Arc::new(InMemoryBlogPostRepository::new()))
    }

    /// State around an existing repository.
    pub fn with_repository(blogposts: Arc<dyn BlogPostRepository>) -> Self {
        Self {
            blogposts,
            #[cfg(feature = "postgres")]
            db: None,
        }
    }

    /// Human-readable storage backend, reported by the health check.
    pub async fn storage_status(&self) -> &'static str {
        #[cfg(feature = "postgres")]
        if let Some(pool) = &self.db {
            return match pool.ping().await {
                Ok(()) => "connected",
                Err(e) => {
                    tracing::error!("Database ping failed: {}", e);
                    "unavailable"
                }
            };
        }

        "in-memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_web::test]
    async fn test_no_database_config_runs_in_memory() {
        let state = AppState::new(None).await;

        assert_eq!(state.storage_status().await, "in-memory");
        assert_eq!(state.blogposts.count().await.unwrap(), 0);
    }
}
