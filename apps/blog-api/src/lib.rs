//! # Blog API
//!
//! Actix-web service exposing the `/blogposts` CRUD resource.

pub mod config;
pub mod handlers;
pub mod middleware;
pub mod observability;
pub mod server;
pub mod state;
pub mod telemetry;

pub use config::AppConfig;
pub use server::{RunningServer, build_server, run_server};
pub use state::AppState;
