//! Data Transfer Objects - request/response types for the API.

use blog_core::DomainError;
use blog_core::domain::{Author, BlogPost, BlogPostUpdate, NewBlogPost};
use serde::{Deserialize, Serialize};

/// Author as it appears on the wire: `{firstName, lastName}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorDto {
    pub first_name: String,
    pub last_name: String,
}

impl From<Author> for AuthorDto {
    fn from(author: Author) -> Self {
        Self {
            first_name: author.first_name,
            last_name: author.last_name,
        }
    }
}

impl From<AuthorDto> for Author {
    fn from(dto: AuthorDto) -> Self {
        Author::new(dto.first_name, dto.last_name)
    }
}

/// Request to create a blog post.
///
/// Fields are optional so that a missing field is reported by name instead
/// of as a generic deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateBlogPostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub author: Option<AuthorDto>,
}

impl From<NewBlogPost> for CreateBlogPostRequest {
    fn from(post: NewBlogPost) -> Self {
        Self {
            title: Some(post.title),
            content: Some(post.content),
            author: Some(post.author.into()),
        }
    }
}

impl TryFrom<CreateBlogPostRequest> for NewBlogPost {
    type Error = DomainError;

    fn try_from(req: CreateBlogPostRequest) -> Result<Self, Self::Error> {
        let title = req.title.ok_or(DomainError::MissingField("title"))?;
        let content = req.content.ok_or(DomainError::MissingField("content"))?;
        let author = req.author.ok_or(DomainError::MissingField("author"))?;

        let post = NewBlogPost::new(title, content, author.into());
        post.validate()?;
        Ok(post)
    }
}

/// Request to partially update a blog post.
///
/// `id` is optional; when present it must match the id in the path.
/// Anything else (such as `author`) is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateBlogPostRequest {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl UpdateBlogPostRequest {
    /// The mutable part of the request.
    pub fn changes(&self) -> BlogPostUpdate {
        BlogPostUpdate {
            title: self.title.clone(),
            content: self.content.clone(),
        }
    }
}

/// A single blog post: exactly `{id, title, content, author}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostResponse {
    pub id: String,
    pub title: String,
    pub content: String,
    pub author: AuthorDto,
}

impl From<BlogPost> for BlogPostResponse {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id.to_string(),
            title: post.title,
            content: post.content,
            author: post.author.into(),
        }
    }
}

/// Response of `GET /blogposts`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPostListResponse {
    pub blogposts: Vec<BlogPostResponse>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_reports_missing_field() {
        let req: CreateBlogPostRequest =
            serde_json::from_value(json!({"title": "Dogs r cool", "content": "lol"})).unwrap();

        let err = NewBlogPost::try_from(req).unwrap_err();
        assert_eq!(err, DomainError::MissingField("author"));
    }

    #[test]
    fn test_create_request_accepts_camel_case_author() {
        let req: CreateBlogPostRequest = serde_json::from_value(json!({
            "title": "Cats r kool",
            "content": "haha u rite",
            "author": {"firstName": "John", "lastName": "Smith"}
        }))
        .unwrap();

        let post = NewBlogPost::try_from(req).unwrap();
        assert_eq!(post.author, Author::new("John", "Smith"));
    }

    #[test]
    fn test_response_has_exactly_four_keys() {
        let post = BlogPost::new(NewBlogPost::new(
            "Dogs r cool",
            "lol",
            Author::new("Jane", "Doe"),
        ));
        let id = post.id.to_string();

        let value = serde_json::to_value(BlogPostResponse::from(post)).unwrap();
        assert_eq!(
            value,
            json!({
                "id": id,
                "title": "Dogs r cool",
                "content": "lol",
                "author": {"firstName": "Jane", "lastName": "Doe"}
            })
        );
    }

    #[test]
    fn test_update_request_ignores_author() {
        let req: UpdateBlogPostRequest = serde_json::from_value(json!({
            "title": "foo",
            "author": {"firstName": "X", "lastName": "Y"}
        }))
        .unwrap();

        assert_eq!(
            req.changes(),
            BlogPostUpdate {
                title: Some("foo".to_string()),
                content: None
            }
        );
    }
}
