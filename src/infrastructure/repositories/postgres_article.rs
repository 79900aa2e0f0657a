// src/infrastructure/repositories/postgres_article.rs
use super::map_sqlx;
use crate::domain::article::{
    Article, ArticleBody, ArticleDescription, ArticleId, ArticleRepository, ArticleSlug,
    ArticleTitle, NewArticle, TagName, TagSet,
};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::UserId;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection, PgPool};

const ARTICLE_SELECT: &str = "SELECT a.id, a.slug, a.title, a.description, a.body, a.author_id,
        a.created_at, a.updated_at,
        ARRAY(SELECT t.name FROM article_tags at JOIN tags t ON t.id = at.tag_id
              WHERE at.article_id = a.id ORDER BY t.name) AS tag_list
     FROM articles a";

#[derive(Clone)]
pub struct PostgresArticleRepository {
    pool: PgPool,
}

impl PostgresArticleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_by_id(conn: &mut PgConnection, id: i64) -> DomainResult<Option<Article>> {
        let sql = format!("{ARTICLE_SELECT} WHERE a.id = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(id)
            .fetch_optional(conn)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    /// Upserts every tag name, drops associations outside `tags`, then links the rest.
    async fn sync_tags(conn: &mut PgConnection, article_id: i64, tags: &TagSet) -> DomainResult<()> {
        let names = tags.names();

        if !names.is_empty() {
            sqlx::query("INSERT INTO tags (name) SELECT UNNEST($1::TEXT[]) ON CONFLICT (name) DO NOTHING")
                .bind(&names)
                .execute(&mut *conn)
                .await
                .map_err(map_sqlx)?;
        }

        sqlx::query(
            "DELETE FROM article_tags
             WHERE article_id = $1
               AND tag_id NOT IN (SELECT id FROM tags WHERE name = ANY($2::TEXT[]))",
        )
        .bind(article_id)
        .bind(&names)
        .execute(&mut *conn)
        .await
        .map_err(map_sqlx)?;

        if !names.is_empty() {
            sqlx::query(
                "INSERT INTO article_tags (article_id, tag_id)
                 SELECT $1, id FROM tags WHERE name = ANY($2::TEXT[])
                 ON CONFLICT DO NOTHING",
            )
            .bind(article_id)
            .bind(&names)
            .execute(&mut *conn)
            .await
            .map_err(map_sqlx)?;
        }

        Ok(())
    }
}

#[derive(Debug, FromRow)]
struct ArticleRow {
    id: i64,
    slug: String,
    title: String,
    description: String,
    body: String,
    author_id: i64,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    tag_list: Vec<String>,
}

impl TryFrom<ArticleRow> for Article {
    type Error = DomainError;

    fn try_from(row: ArticleRow) -> Result<Self, Self::Error> {
        Ok(Article {
            id: ArticleId::new(row.id)?,
            slug: ArticleSlug::new(row.slug)?,
            title: ArticleTitle::new(row.title)?,
            description: ArticleDescription::new(row.description)?,
            body: ArticleBody::new(row.body)?,
            author_id: UserId::new(row.author_id)?,
            tags: TagSet::parse(row.tag_list)?,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl ArticleRepository for PostgresArticleRepository {
    async fn insert(&self, article: NewArticle) -> DomainResult<Article> {
        let NewArticle {
            slug,
            title,
            description,
            body,
            author_id,
            tags,
            created_at,
            updated_at,
        } = article;

        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO articles (slug, title, description, body, author_id, created_at, updated_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING id",
        )
        .bind(slug.as_str())
        .bind(title.as_str())
        .bind(description.as_str())
        .bind(body.as_str())
        .bind(i64::from(author_id))
        .bind(created_at)
        .bind(updated_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        Self::sync_tags(&mut tx, id, &tags).await?;
        let stored = Self::fetch_by_id(&mut tx, id)
            .await?
            .ok_or_else(|| DomainError::Persistence("inserted article vanished".into()))?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(stored)
    }

    async fn update(&self, article: Article) -> DomainResult<Article> {
        let id = i64::from(article.id);
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        let result = sqlx::query(
            "UPDATE articles
             SET slug = $2, title = $3, description = $4, body = $5, updated_at = $6
             WHERE id = $1",
        )
        .bind(id)
        .bind(article.slug.as_str())
        .bind(article.title.as_str())
        .bind(article.description.as_str())
        .bind(article.body.as_str())
        .bind(article.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(map_sqlx)?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }

        Self::sync_tags(&mut tx, id, &article.tags).await?;
        let stored = Self::fetch_by_id(&mut tx, id)
            .await?
            .ok_or_else(|| DomainError::NotFound("article not found".into()))?;

        tx.commit().await.map_err(map_sqlx)?;
        Ok(stored)
    }

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>> {
        let mut conn = self.pool.acquire().await.map_err(map_sqlx)?;
        Self::fetch_by_id(&mut conn, i64::from(id)).await
    }

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>> {
        let sql = format!("{ARTICLE_SELECT} WHERE a.slug = $1");
        let row = sqlx::query_as::<_, ArticleRow>(&sql)
            .bind(slug.as_str())
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        row.map(Article::try_from).transpose()
    }

    async fn slug_exists(&self, slug: &str, excluding: Option<ArticleId>) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (
                 SELECT 1 FROM articles WHERE slug = $1 AND ($2::BIGINT IS NULL OR id <> $2)
             )",
        )
        .bind(slug)
        .bind(excluding.map(i64::from))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn delete(&self, id: ArticleId) -> DomainResult<()> {
        let id = i64::from(id);
        let mut tx = self.pool.begin().await.map_err(map_sqlx)?;

        for statement in [
            "DELETE FROM article_tags WHERE article_id = $1",
            "DELETE FROM favorites WHERE article_id = $1",
            "DELETE FROM comments WHERE article_id = $1",
        ] {
            sqlx::query(statement)
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx)?;
        }

        let result = sqlx::query("DELETE FROM articles WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(map_sqlx)?;
        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound("article not found".into()));
        }

        tx.commit().await.map_err(map_sqlx)?;
        Ok(())
    }

    async fn favorite(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<()> {
        sqlx::query(
            "INSERT INTO favorites (article_id, user_id) VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(i64::from(article_id))
        .bind(i64::from(user_id))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(())
    }

    async fn unfavorite(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<()> {
        sqlx::query("DELETE FROM favorites WHERE article_id = $1 AND user_id = $2")
            .bind(i64::from(article_id))
            .bind(i64::from(user_id))
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }

    async fn is_favorited(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM favorites WHERE article_id = $1 AND user_id = $2)",
        )
        .bind(i64::from(article_id))
        .bind(i64::from(user_id))
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)
    }

    async fn all_tags(&self) -> DomainResult<Vec<TagName>> {
        let names = sqlx::query_scalar::<_, String>("SELECT name FROM tags ORDER BY name")
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        names.into_iter().map(TagName::new).collect()
    }
}
