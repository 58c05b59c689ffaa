//! `/blogposts` resource handlers.

use actix_web::{HttpResponse, http::header, web};
use uuid::Uuid;

use blog_core::domain::{BlogPost, NewBlogPost};
use blog_core::ports::{BaseRepository, BlogPostRepository};
use blog_core::{DomainError, RepoError};
use blog_shared::{
    BlogPostListResponse, BlogPostResponse, CreateBlogPostRequest, UpdateBlogPostRequest,
};

use crate::middleware::error::{AppError, AppResult};
use crate::observability::RequestId;
use crate::state::AppState;

fn parse_id(raw: &str) -> AppResult<Uuid> {
    Uuid::parse_str(raw).map_err(|_| AppError::BadRequest(format!("Invalid blog post id `{}`", raw)))
}

fn not_found(id: Uuid) -> AppError {
    DomainError::NotFound {
        entity_type: "BlogPost",
        id,
    }
    .into()
}

/// A repository miss on `id` becomes a 404 naming the post.
fn or_not_found(id: Uuid) -> impl FnOnce(RepoError) -> AppError {
    move |err| match err {
        RepoError::NotFound => not_found(id),
        err => err.into(),
    }
}

/// GET /blogposts
pub async fn list(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.blogposts.find_all().await?;

    Ok(HttpResponse::Ok().json(BlogPostListResponse {
        blogposts: posts.into_iter().map(Into::into).collect(),
    }))
}

/// GET /blogposts/{id}
pub async fn get(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let post = state
        .blogposts
        .find_by_id(id)
        .await?
        .ok_or_else(|| not_found(id))?;

    Ok(HttpResponse::Ok().json(BlogPostResponse::from(post)))
}

/// POST /blogposts
pub async fn create(
    state: web::Data<AppState>,
    request_id: RequestId,
    body: web::Json<CreateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let new_post = NewBlogPost::try_from(body.into_inner())?;

    let post = state.blogposts.insert(BlogPost::new(new_post)).await?;
    tracing::info!(
        request_id = %request_id.as_str(),
        blogpost_id = %post.id,
        author = %post.author.full_name(),
        "Blog post created"
    );

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/blogposts/{}", post.id)))
        .json(BlogPostResponse::from(post)))
}

/// PUT /blogposts/{id}
///
/// Partial update of `title` and/or `content`. A body `id`, when sent, must
/// name the same post as the path.
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<UpdateBlogPostRequest>,
) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;
    let req = body.into_inner();

    if let Some(body_id) = &req.id {
        if Uuid::parse_str(body_id).ok() != Some(id) {
            return Err(AppError::BadRequest(format!(
                "Request path id ({}) and request body id ({}) must match",
                path.as_str(),
                body_id
            )));
        }
    }

    let changes = req.changes();
    changes.validate()?;

    state
        .blogposts
        .update(id, changes)
        .await
        .map_err(or_not_found(id))?;
    tracing::info!(blogpost_id = %id, "Blog post updated");

    Ok(HttpResponse::NoContent().finish())
}

/// DELETE /blogposts/{id}
pub async fn delete(state: web::Data<AppState>, path: web::Path<String>) -> AppResult<HttpResponse> {
    let id = parse_id(&path)?;

    state
        .blogposts
        .delete(id)
        .await
        .map_err(or_not_found(id))?;
    tracing::info!(blogpost_id = %id, "Blog post deleted");

    Ok(HttpResponse::NoContent().finish())
}
