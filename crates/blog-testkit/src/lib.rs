//! # Blog Testkit
//!
//! Shared test helpers: randomized blog post fixtures and the seed/teardown
//! routines the API integration suite runs around every scenario.

pub mod fixtures;
pub mod names;
pub mod seed;

pub use fixtures::{
    BlogPostGenerator, DEFAULT_BATCH_SIZE, FixtureError, SAMPLE_CONTENTS, SAMPLE_TITLES,
};
pub use names::{NameLists, NameSource, SampleNames};
pub use seed::{SeedError, seed_blog_posts, tear_down_db};
