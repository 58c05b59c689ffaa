//! # Blog Core
//!
//! The domain layer of the blogpost service.
//! This crate contains the blogpost model, its validation rules and the
//! repository port, with zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;

pub use error::{DomainError, RepoError};
