//! PostgreSQL blog post repository.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, PaginatorTrait, QueryOrder, Set};
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogPostUpdate};
use blog_core::error::RepoError;
use blog_core::ports::BlogPostRepository;

use super::entity::blogpost::{self, Entity as BlogPostEntity};
use super::postgres_base::{PostgresBaseRepository, query_error, write_error};

/// PostgreSQL blog post repository.
pub type PostgresBlogPostRepository = PostgresBaseRepository<BlogPostEntity>;

#[async_trait]
impl BlogPostRepository for PostgresBlogPostRepository {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let result = BlogPostEntity::find()
            .order_by_asc(blogpost::Column::CreatedAt)
            .all(self.db.as_ref())
            .await
            .map_err(query_error)?;

        Ok(result.into_iter().map(Into::into).collect())
    }

    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError> {
        let result = BlogPostEntity::find()
            .order_by_asc(blogpost::Column::CreatedAt)
            .one(self.db.as_ref())
            .await
            .map_err(query_error)?;

        Ok(result.map(Into::into))
    }

    async fn count(&self) -> Result<u64, RepoError> {
        BlogPostEntity::find()
            .count(self.db.as_ref())
            .await
            .map_err(query_error)
    }

    async fn insert(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let model: blogpost::ActiveModel = post.into();
        let stored = model.insert(self.db.as_ref()).await.map_err(write_error)?;

        Ok(stored.into())
    }

    async fn insert_many(&self, posts: Vec<BlogPost>) -> Result<Vec<BlogPost>, RepoError> {
        if posts.is_empty() {
            return Ok(posts);
        }

        // One statement shares a single `now()`; stagger the timestamps so
        // the batch reads back in the order it was given.
        let base = Utc::now();
        let models = posts.iter().cloned().enumerate().map(|(i, post)| {
            let mut model: blogpost::ActiveModel = post.into();
            model.created_at = Set((base + Duration::microseconds(i as i64)).into());
            model
        });

        BlogPostEntity::insert_many(models)
            .exec_without_returning(self.db.as_ref())
            .await
            .map_err(write_error)?;

        tracing::debug!(count = posts.len(), "Inserted blog posts");
        Ok(posts)
    }

    async fn update(&self, id: Uuid, changes: BlogPostUpdate) -> Result<BlogPost, RepoError> {
        let model = BlogPostEntity::find_by_id(id)
            .one(self.db.as_ref())
            .await
            .map_err(query_error)?
            .ok_or(RepoError::NotFound)?;

        let mut active = model.into_active_model();
        if let Some(title) = changes.title {
            active.title = Set(title);
        }
        if let Some(content) = changes.content {
            active.content = Set(content);
        }

        let updated = active
            .update(self.db.as_ref())
            .await
            .map_err(write_error)?;

        Ok(updated.into())
    }

    async fn clear(&self) -> Result<u64, RepoError> {
        let result = BlogPostEntity::delete_many()
            .exec(self.db.as_ref())
            .await
            .map_err(query_error)?;

        Ok(result.rows_affected)
    }
}
