//! # Blog Infrastructure
//!
//! Concrete implementations of the repository port defined in `blog-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL storage via SeaORM
//!
//! Without `postgres` only the in-memory store is built.

pub mod database;

pub use database::{DatabaseConfig, InMemoryBlogPostRepository};

#[cfg(feature = "postgres")]
pub use database::{DatabasePool, PostgresBlogPostRepository};
#[cfg(feature = "postgres")]
pub use sea_orm::DbErr;
