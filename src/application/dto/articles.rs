// src/application/dto/articles.rs
use crate::application::dto::profiles::ProfileView;
use crate::domain::article::{Article, TagName};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Result of an article command: the persisted aggregate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleDto {
    pub id: i64,
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
    pub author_id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Article> for ArticleDto {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.into(),
            tag_list: article.tags.names(),
            slug: article.slug.into_inner(),
            title: article.title.into_inner(),
            description: article.description.into_inner(),
            body: article.body.into_inner(),
            author_id: article.author_id.into(),
            created_at: article.created_at,
            updated_at: article.updated_at,
        }
    }
}

/// Read projection: article joined with its author profile and viewer flags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleView {
    pub slug: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub tag_list: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub favorited: bool,
    pub favorites_count: i64,
    pub author: ProfileView,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagsDto {
    pub tags: Vec<String>,
}

impl From<Vec<TagName>> for TagsDto {
    fn from(tags: Vec<TagName>) -> Self {
        Self {
            tags: tags.into_iter().map(|tag| tag.as_str().to_string()).collect(),
        }
    }
}
