//! In-memory blog post repository - used when no database is configured
//! and by the default integration test run.

use std::collections::HashSet;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::{BlogPost, BlogPostUpdate};
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, BlogPostRepository};

/// Blog post store backed by a `Vec` behind an async RwLock.
///
/// The `Vec` keeps insertion order, which is the order collection reads
/// return. Data is lost on process restart.
pub struct InMemoryBlogPostRepository {
    store: RwLock<Vec<BlogPost>>,
}

impl InMemoryBlogPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Vec::new()),
        }
    }
}

impl Default for InMemoryBlogPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<BlogPost, Uuid> for InMemoryBlogPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|post| post.id == id).cloned())
    }

    async fn save(&self, entity: BlogPost) -> Result<BlogPost, RepoError> {
        let mut store = self.store.write().await;

        match store.iter_mut().find(|post| post.id == entity.id) {
            Some(existing) => *existing = entity.clone(),
            None => store.push(entity.clone()),
        }

        Ok(entity)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|post| post.id != id);

        if store.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl BlogPostRepository for InMemoryBlogPostRepository {
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        Ok(self.store.read().await.clone())
    }

    async fn find_one(&self) -> Result<Option<BlogPost>, RepoError> {
        Ok(self.store.read().await.first().cloned())
    }

    async fn count(&self) -> Result<u64, RepoError> {
        Ok(self.store.read().await.len() as u64)
    }

    async fn insert(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let mut store = self.store.write().await;

        if store.iter().any(|existing| existing.id == post.id) {
            return Err(duplicate(post.id));
        }
        store.push(post.clone());

        Ok(post)
    }

    async fn insert_many(&self, posts: Vec<BlogPost>) -> Result<Vec<BlogPost>, RepoError> {
        let mut store = self.store.write().await;

        let mut ids: HashSet<Uuid> = store.iter().map(|existing| existing.id).collect();
        for post in &posts {
            if !ids.insert(post.id) {
                return Err(duplicate(post.id));
            }
        }
        store.extend(posts.iter().cloned());

        tracing::debug!(count = posts.len(), "Inserted blog posts");
        Ok(posts)
    }

    async fn update(&self, id: Uuid, changes: BlogPostUpdate) -> Result<BlogPost, RepoError> {
        let mut store = self.store.write().await;
        let post = store
            .iter_mut()
            .find(|post| post.id == id)
            .ok_or(RepoError::NotFound)?;

        post.apply(changes);
        Ok(post.clone())
    }

    async fn clear(&self) -> Result<u64, RepoError> {
        let mut store = self.store.write().await;
        let removed = store.len() as u64;
        store.clear();
        Ok(removed)
    }
}

fn duplicate(id: Uuid) -> RepoError {
    RepoError::Constraint(format!("blog post {} already exists", id))
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::domain::{Author, NewBlogPost};

    fn post(title: &str) -> BlogPost {
        BlogPost::new(NewBlogPost::new(title, "lol", Author::new("Jane", "Doe")))
    }

    #[tokio::test]
    async fn test_insert_many_keeps_order() {
        let repo = InMemoryBlogPostRepository::new();
        let posts = vec![post("first"), post("second"), post("third")];
        repo.insert_many(posts.clone()).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 3);
        assert_eq!(repo.find_all().await.unwrap(), posts);
        assert_eq!(repo.find_one().await.unwrap(), Some(posts[0].clone()));
    }

    #[tokio::test]
    async fn test_insert_many_rejects_duplicate_ids() {
        let repo = InMemoryBlogPostRepository::new();
        let existing = post("first");
        repo.save(existing.clone()).await.unwrap();

        let result = repo.insert_many(vec![post("second"), existing]).await;
        assert!(matches!(result, Err(RepoError::Constraint(_))));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_insert_many_rejects_duplicates_within_batch() {
        let repo = InMemoryBlogPostRepository::new();
        let twin = post("first");

        let result = repo
            .insert_many(vec![twin.clone(), post("second"), twin])
            .await;

        assert!(matches!(result, Err(RepoError::Constraint(_))));
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_insert_never_overwrites() {
        let repo = InMemoryBlogPostRepository::new();
        let original = repo.insert(post("first")).await.unwrap();

        let mut clash = original.clone();
        clash.title = "renamed".to_string();
        let result = repo.insert(clash).await;

        assert!(matches!(result, Err(RepoError::Constraint(_))));
        assert_eq!(repo.find_all().await.unwrap(), vec![original]);
    }

    #[tokio::test]
    async fn test_save_replaces_existing() {
        let repo = InMemoryBlogPostRepository::new();
        let mut stored = repo.save(post("first")).await.unwrap();
        stored.title = "renamed".to_string();
        repo.save(stored.clone()).await.unwrap();

        assert_eq!(repo.count().await.unwrap(), 1);
        assert_eq!(repo.find_by_id(stored.id).await.unwrap(), Some(stored));
    }

    #[tokio::test]
    async fn test_update_is_partial() {
        let repo = InMemoryBlogPostRepository::new();
        let stored = repo.save(post("first")).await.unwrap();

        let updated = repo
            .update(
                stored.id,
                BlogPostUpdate {
                    title: None,
                    content: Some("bar".to_string()),
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "first");
        assert_eq!(updated.content, "bar");
        assert_eq!(updated.author, stored.author);
    }

    #[tokio::test]
    async fn test_update_unknown_id() {
        let repo = InMemoryBlogPostRepository::new();
        let result = repo.update(Uuid::new_v4(), BlogPostUpdate::default()).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn test_delete_and_clear() {
        let repo = InMemoryBlogPostRepository::new();
        let posts = repo
            .insert_many(vec![post("a"), post("b"), post("c")])
            .await
            .unwrap();

        repo.delete(posts[1].id).await.unwrap();
        assert_eq!(repo.find_by_id(posts[1].id).await.unwrap(), None);
        assert!(matches!(
            repo.delete(posts[1].id).await,
            Err(RepoError::NotFound)
        ));

        assert_eq!(repo.clear().await.unwrap(), 2);
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
