//! Shared setup and teardown for the API integration suites.
//!
//! Every scenario owns a [`TestApp`]: `spawn` wipes the store and seeds it,
//! `teardown` wipes it again. By default each app gets its own in-memory
//! store. With `TEST_DATABASE_URL` set, the suites run against that
//! dedicated PostgreSQL database instead, one scenario at a time.

#![allow(dead_code)]

use std::collections::BTreeSet;
use std::sync::{Mutex, MutexGuard};

use blog_api::telemetry::init_test_telemetry;
#[cfg(feature = "postgres")]
use blog_api::AppConfig;
use blog_api::AppState;
use blog_core::domain::BlogPost;
use blog_core::ports::BlogPostRepository;
use blog_testkit::{BlogPostGenerator, DEFAULT_BATCH_SIZE, seed_blog_posts, tear_down_db};
#[cfg(feature = "postgres")]
use migration::{Migrator, MigratorTrait};
use serde_json::Value;

/// Seed used unless `FIXTURE_SEED` overrides it.
const DEFAULT_FIXTURE_SEED: u64 = 42;

/// Serializes scenarios that share the external test database.
static SHARED_DATABASE: Mutex<()> = Mutex::new(());

/// Build an actix test service around `$app`'s state, with the same routes
/// and request-id middleware as the real server.
#[allow(unused_macros)]
macro_rules! init_api {
    ($app:expr) => {
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(blog_api::observability::RequestIdMiddleware)
                .app_data(actix_web::web::Data::new($app.state.clone()))
                .configure(blog_api::handlers::configure_routes),
        )
        .await
    };
}

pub struct TestApp {
    pub state: AppState,
    pub seeded: Vec<BlogPost>,
    pub generator: BlogPostGenerator,
    _shared_database: Option<MutexGuard<'static, ()>>,
}

impl TestApp {
    /// Fresh store seeded with the default batch.
    pub async fn spawn() -> Self {
        Self::spawn_with_batch(DEFAULT_BATCH_SIZE).await
    }

    /// Fresh store seeded with `n` generated posts.
    pub async fn spawn_with_batch(n: usize) -> Self {
        init_test_telemetry();

        let (state, guard) = test_state().await;
        let mut generator = BlogPostGenerator::seeded(fixture_seed());

        // Leftovers from a scenario that failed before its teardown.
        tear_down_db(state.blogposts.as_ref())
            .await
            .expect("failed to wipe test store");

        let seeded = seed_blog_posts(state.blogposts.as_ref(), &mut generator, n)
            .await
            .expect("failed to seed test store");

        Self {
            state,
            seeded,
            generator,
            _shared_database: guard,
        }
    }

    /// The backing store, queried directly rather than through the API.
    pub fn repo(&self) -> &dyn BlogPostRepository {
        self.state.blogposts.as_ref()
    }

    pub async fn teardown(self) {
        tear_down_db(self.repo())
            .await
            .expect("failed to wipe test store");
    }
}

fn fixture_seed() -> u64 {
    std::env::var("FIXTURE_SEED")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_FIXTURE_SEED)
}

#[cfg(not(feature = "postgres"))]
async fn test_state() -> (AppState, Option<MutexGuard<'static, ()>>) {
    (AppState::in_memory(), None)
}

#[cfg(feature = "postgres")]
async fn test_state() -> (AppState, Option<MutexGuard<'static, ()>>) {
    let Some(db_config) = AppConfig::for_tests().database else {
        return (AppState::in_memory(), None);
    };

    let guard = SHARED_DATABASE
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());

    let state = AppState::connect(&db_config)
        .await
        .expect("TEST_DATABASE_URL is set but the database is unreachable");
    if let Some(pool) = &state.db {
        Migrator::up(pool.conn.as_ref(), None)
            .await
            .expect("failed to migrate test database");
    }

    (state, Some(guard))
}

/// The keys of a JSON object.
pub fn keys(value: &Value) -> BTreeSet<&str> {
    value
        .as_object()
        .expect("expected a JSON object")
        .keys()
        .map(String::as_str)
        .collect()
}

/// The exact key set of a blog post on the wire.
pub fn blogpost_keys() -> BTreeSet<&'static str> {
    BTreeSet::from(["id", "title", "content", "author"])
}
