//! BlogPost entity for SeaORM.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use blog_core::domain::{Author, BlogPost};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "blogposts")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub author_first_name: String,
    pub author_last_name: String,
    /// Insertion time, used only to keep collection reads in insertion order.
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain BlogPost.
impl From<Model> for BlogPost {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            content: model.content,
            author: Author::new(model.author_first_name, model.author_last_name),
        }
    }
}

/// Conversion from Domain BlogPost to SeaORM ActiveModel.
///
/// `created_at` is left unset so that the column default applies on insert
/// and an update never rewrites it.
impl From<BlogPost> for ActiveModel {
    fn from(post: BlogPost) -> Self {
        Self {
            id: Set(post.id),
            title: Set(post.title),
            content: Set(post.content),
            author_first_name: Set(post.author.first_name),
            author_last_name: Set(post.author.last_name),
            created_at: NotSet,
        }
    }
}
