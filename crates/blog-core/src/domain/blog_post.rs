use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Author of a blog post. Always a first/last name pair, never a bare string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub first_name: String,
    pub last_name: String,
}

impl Author {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// "First Last", as used in log lines.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// BlogPost entity - a persisted post with its store-assigned id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub author: Author,
}

impl BlogPost {
    /// Create a post from a submitted payload, assigning a fresh id.
    pub fn new(post: NewBlogPost) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: post.title,
            content: post.content,
            author: post.author,
        }
    }

    /// Apply a partial update. Fields absent from `update` are left untouched.
    pub fn apply(&mut self, update: BlogPostUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(content) = update.content {
            self.content = content;
        }
    }
}

/// A blog post payload that has not been stored yet (no id).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    pub author: Author,
}

impl NewBlogPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>, author: Author) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            author,
        }
    }

    /// Every field must be present and non-blank.
    pub fn validate(&self) -> Result<(), DomainError> {
        require_text("title", &self.title)?;
        require_text("content", &self.content)?;
        require_text("author.firstName", &self.author.first_name)?;
        require_text("author.lastName", &self.author.last_name)
    }
}

/// Partial update of a blog post. Only `title` and `content` are mutable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl BlogPostUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.is_empty() {
            return Err(DomainError::Validation(
                "update must contain `title` or `content`".to_string(),
            ));
        }
        if let Some(title) = &self.title {
            require_text("title", title)?;
        }
        if let Some(content) = &self.content {
            require_text("content", content)?;
        }
        Ok(())
    }
}

fn require_text(field: &str, value: &str) -> Result<(), DomainError> {
    if value.trim().is_empty() {
        return Err(DomainError::Validation(format!("`{field}` must not be empty")));
    }
    Ok(())
}
