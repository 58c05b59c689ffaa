//! Seeding and teardown of a blog post store.

use blog_core::domain::BlogPost;
use blog_core::error::RepoError;
use blog_core::ports::BlogPostRepository;
use thiserror::Error;

use crate::fixtures::{BlogPostGenerator, FixtureError};
use crate::names::NameSource;

/// Seeding failed; the scenario cannot run.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("fixture generation failed: {0}")]
    Fixture(#[from] FixtureError),

    #[error("storing seed data failed: {0}")]
    Store(#[from] RepoError),
}

/// Insert `n` generated posts into `repo` and return them as stored.
pub async fn seed_blog_posts<N: NameSource>(
    repo: &dyn BlogPostRepository,
    generator: &mut BlogPostGenerator<N>,
    n: usize,
) -> Result<Vec<BlogPost>, SeedError> {
    tracing::info!(count = n, "seeding blogpost data");

    let posts = generator
        .batch(n)?
        .into_iter()
        .map(BlogPost::new)
        .collect();

    Ok(repo.insert_many(posts).await?)
}

/// Remove every post from `repo`.
pub async fn tear_down_db(repo: &dyn BlogPostRepository) -> Result<u64, RepoError> {
    tracing::warn!("Deleting database");
    repo.clear().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::DEFAULT_BATCH_SIZE;
    use crate::names::NameLists;
    use blog_infra::InMemoryBlogPostRepository;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[tokio::test]
    async fn test_seed_then_tear_down() {
        let repo = InMemoryBlogPostRepository::new();
        let mut generator = BlogPostGenerator::seeded(9);

        let seeded = seed_blog_posts(&repo, &mut generator, DEFAULT_BATCH_SIZE)
            .await
            .unwrap();

        assert_eq!(seeded.len(), DEFAULT_BATCH_SIZE);
        assert_eq!(repo.count().await.unwrap(), DEFAULT_BATCH_SIZE as u64);
        assert_eq!(repo.find_all().await.unwrap(), seeded);

        assert_eq!(tear_down_db(&repo).await.unwrap(), DEFAULT_BATCH_SIZE as u64);
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_seed_aborts_without_names() {
        let repo = InMemoryBlogPostRepository::new();
        let mut generator =
            BlogPostGenerator::with_names(StdRng::seed_from_u64(0), NameLists::default());

        let result = seed_blog_posts(&repo, &mut generator, DEFAULT_BATCH_SIZE).await;

        assert!(matches!(
            result,
            Err(SeedError::Fixture(FixtureError::NameSourceUnavailable))
        ));
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
