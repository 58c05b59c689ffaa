use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPost, BlogPostUpdate};
use crate::error::RepoError;

/// Generic repository trait defining standard CRUD operations.
#[async_trait]
pub trait BaseRepository<T, ID>: Send + Sync {
    /// Find an entity by its unique ID.
    async fn find_by_id(&self, id: ID) -> Result<Option<T>, RepoError>;

    /// Save an entity (create or update).
    async fn save(&self, entity: T) -> Result<T, RepoError>;

    /// Delete an entity by its ID.
    async fn delete(&self, id: ID) -> Result<(), RepoError>;
}

/// Blog post repository.
///
/// Collection reads return posts in insertion order, oldest first.
#[async_trait]
pub trait BlogPostRepository: BaseRepository<BlogPost, Uuid> {
    /// All stored posts.
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// The oldest stored post, if any.
    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError>;

    /// Number of stored posts.
    async fn count(&self) -> Result<u64, RepoError>;

    /// Store a new post. An id that is already taken is a
    /// `RepoError::Constraint`, never an overwrite.
    async fn insert(&self, post: BlogPost) -> Result<BlogPost, RepoError>;

    /// Bulk insert, used for seeding. All-or-nothing: a duplicate id, within
    /// the batch or against stored posts, rejects the whole batch.
    async fn insert_many(&self, posts: Vec<BlogPost>) -> Result<Vec<BlogPost>, RepoError>;

    /// Apply a partial update and return the stored result.
    ///
    /// Returns `RepoError::NotFound` when no post has this id.
    async fn update(&self, id: Uuid, changes: BlogPostUpdate) -> Result<BlogPost, RepoError>;

    /// Remove every post. Returns the number of removed rows.
    async fn clear(&self) -> Result<u64, RepoError>;
}
