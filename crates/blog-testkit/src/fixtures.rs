//! Randomized, schema-valid blog post fixtures.
//!
//! Every generator owns an explicit [`StdRng`], so a seed reproduces the
//! exact same sequence of records.

use blog_core::domain::{Author, NewBlogPost};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

use crate::names::{NameSource, SampleNames};

/// Titles a fixture post can carry.
pub const SAMPLE_TITLES: &[&str] = &[
    "Dogs r cool",
    "Cats r kool",
    "What's up with turtles?",
    "Don't forget fish",
];

/// Bodies a fixture post can carry.
pub const SAMPLE_CONTENTS: &[&str] = &["lol", "haha u rite", "nah LOL"];

/// Number of posts seeded before each scenario.
pub const DEFAULT_BATCH_SIZE: usize = 9;

/// Fixture generation failures. All of them are fatal for seeding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FixtureError {
    #[error("fake-name source unavailable")]
    NameSourceUnavailable,
}

/// Generator of [`NewBlogPost`] fixtures.
pub struct BlogPostGenerator<N = SampleNames> {
    rng: StdRng,
    names: N,
}

impl BlogPostGenerator<SampleNames> {
    /// Reproducible generator using the built-in name lists.
    pub fn seeded(seed: u64) -> Self {
        Self::with_names(StdRng::seed_from_u64(seed), SampleNames)
    }

    /// Generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::with_names(StdRng::from_entropy(), SampleNames)
    }
}

impl<N: NameSource> BlogPostGenerator<N> {
    pub fn with_names(rng: StdRng, names: N) -> Self {
        Self { rng, names }
    }

    pub fn title(&mut self) -> &'static str {
        SAMPLE_TITLES[self.rng.gen_range(0..SAMPLE_TITLES.len())]
    }

    pub fn content(&mut self) -> &'static str {
        SAMPLE_CONTENTS[self.rng.gen_range(0..SAMPLE_CONTENTS.len())]
    }

    pub fn author(&mut self) -> Result<Author, FixtureError> {
        let first_name = self.names.first_name(&mut self.rng)?;
        let last_name = self.names.last_name(&mut self.rng)?;
        Ok(Author::new(first_name, last_name))
    }

    /// One complete post payload.
    pub fn blog_post(&mut self) -> Result<NewBlogPost, FixtureError> {
        let title = self.title();
        let content = self.content();
        let author = self.author()?;
        Ok(NewBlogPost::new(title, content, author))
    }

    /// `n` independently generated posts. Duplicates are allowed.
    pub fn batch(&mut self, n: usize) -> Result<Vec<NewBlogPost>, FixtureError> {
        (0..n).map(|_| self.blog_post()).collect()
    }
}
