//! # Blog Shared
//!
//! Wire types shared by the blogpost API and its clients (including the
//! integration suite).

pub mod dto;
pub mod response;

pub use dto::{
    AuthorDto, BlogPostListResponse, BlogPostResponse, CreateBlogPostRequest,
    UpdateBlogPostRequest,
};
pub use response::ErrorResponse;
