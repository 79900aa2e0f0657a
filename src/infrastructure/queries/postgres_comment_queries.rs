// src/infrastructure/queries/postgres_comment_queries.rs
use crate::application::{
    ApplicationResult,
    dto::{CommentView, ProfileView},
    ports::queries::CommentQueries,
};
use crate::domain::user::UserId;
use crate::infrastructure::repositories::map_sqlx;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};

const COMMENT_VIEW_SELECT: &str = "SELECT c.id, c.body, c.created_at, c.updated_at,
        u.username AS author_username, u.bio AS author_bio, u.image AS author_image,
        EXISTS (SELECT 1 FROM followers fo
                WHERE fo.followee_id = u.id AND fo.follower_id = $2) AS author_following
     FROM comments c JOIN users u ON u.id = c.author_id";

#[derive(Clone)]
pub struct PostgresCommentQueries {
    pool: PgPool,
}

impl PostgresCommentQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct CommentViewRow {
    id: i64,
    body: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    author_username: String,
    author_bio: Option<String>,
    author_image: Option<String>,
    author_following: bool,
}

impl From<CommentViewRow> for CommentView {
    fn from(row: CommentViewRow) -> Self {
        Self {
            id: row.id,
            body: row.body,
            created_at: row.created_at,
            updated_at: row.updated_at,
            author: ProfileView {
                username: row.author_username,
                bio: row.author_bio,
                image: row.author_image,
                following: row.author_following,
            },
        }
    }
}

#[async_trait]
impl CommentQueries for PostgresCommentQueries {
    async fn list_by_article_slug(
        &self,
        slug: &str,
        viewer: Option<UserId>,
    ) -> ApplicationResult<Option<Vec<CommentView>>> {
        let article_id = sqlx::query_scalar::<_, i64>("SELECT id FROM articles WHERE slug = $1")
            .bind(slug)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        let Some(article_id) = article_id else {
            return Ok(None);
        };

        let sql = format!(
            "{COMMENT_VIEW_SELECT} WHERE c.article_id = $1 ORDER BY c.created_at ASC, c.id ASC"
        );
        let rows = sqlx::query_as::<_, CommentViewRow>(&sql)
            .bind(article_id)
            .bind(viewer.map(i64::from))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(Some(rows.into_iter().map(Into::into).collect()))
    }

    async fn find_by_id(
        &self,
        comment_id: i64,
        viewer: Option<UserId>,
    ) -> ApplicationResult<Option<CommentView>> {
        let sql = format!("{COMMENT_VIEW_SELECT} WHERE c.id = $1");
        let row = sqlx::query_as::<_, CommentViewRow>(&sql)
            .bind(comment_id)
            .bind(viewer.map(i64::from))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(row.map(Into::into))
    }
}
