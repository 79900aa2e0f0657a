// src/infrastructure/queries/postgres_article_queries.rs
use crate::application::{
    ApplicationResult,
    dto::{ArticleView, PageRequest, ProfileView},
    ports::queries::{ArticleFilter, ArticleQueries},
};
use crate::domain::user::UserId;
use crate::infrastructure::repositories::map_sqlx;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool, Postgres, QueryBuilder};

#[derive(Clone)]
pub struct PostgresArticleQueries {
    pool: PgPool,
}

impl PostgresArticleQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn select(viewer: Option<UserId>) -> QueryBuilder<'static, Postgres> {
        let viewer = viewer.map(i64::from);
        let mut builder: QueryBuilder<Postgres> = QueryBuilder::new(
            "SELECT a.slug, a.title, a.description, a.body,
                    ARRAY(SELECT t.name FROM article_tags at JOIN tags t ON t.id = at.tag_id
                          WHERE at.article_id = a.id ORDER BY t.name) AS tag_list,
                    a.created_at, a.updated_at,
                    EXISTS (SELECT 1 FROM favorites f WHERE f.article_id = a.id AND f.user_id = ",
        );
        builder.push_bind(viewer);
        builder.push(
            ") AS favorited,
                    (SELECT COUNT(*) FROM favorites f WHERE f.article_id = a.id) AS favorites_count,
                    u.username AS author_username, u.bio AS author_bio, u.image AS author_image,
                    EXISTS (SELECT 1 FROM followers fo
                            WHERE fo.followee_id = u.id AND fo.follower_id = ",
        );
        builder.push_bind(viewer);
        builder.push(
            ") AS author_following
             FROM articles a JOIN users u ON u.id = a.author_id",
        );
        builder
    }

    fn apply_filter(builder: &mut QueryBuilder<'static, Postgres>, filter: &ArticleFilter) {
        let mut has_where = false;
        let mut condition = |builder: &mut QueryBuilder<'static, Postgres>| {
            builder.push(if has_where { " AND " } else { " WHERE " });
            has_where = true;
        };

        if let Some(tag) = &filter.tag {
            condition(builder);
            builder.push(
                "EXISTS (SELECT 1 FROM article_tags at JOIN tags t ON t.id = at.tag_id
                         WHERE at.article_id = a.id AND t.name = ",
            );
            builder.push_bind(tag.clone());
            builder.push(")");
        }

        if let Some(author) = &filter.author {
            condition(builder);
            builder.push("u.username = ");
            builder.push_bind(author.clone());
        }

        if let Some(username) = &filter.favorited_by {
            condition(builder);
            builder.push(
                "EXISTS (SELECT 1 FROM favorites f JOIN users fu ON fu.id = f.user_id
                         WHERE f.article_id = a.id AND fu.username = ",
            );
            builder.push_bind(username.clone());
            builder.push(")");
        }
    }

    fn apply_page(builder: &mut QueryBuilder<'static, Postgres>, page: PageRequest) {
        let page = page.normalized();
        builder.push(" ORDER BY a.created_at DESC, a.id DESC LIMIT ");
        builder.push_bind(i64::from(page.limit));
        builder.push(" OFFSET ");
        builder.push_bind(i64::from(page.offset));
    }

    async fn fetch_all(
        &self,
        mut builder: QueryBuilder<'static, Postgres>,
    ) -> ApplicationResult<Vec<ArticleView>> {
        let rows = builder
            .build_query_as::<ArticleViewRow>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}

#[derive(Debug, FromRow)]
struct ArticleViewRow {
    slug: String,
    title: String,
    description: String,
    body: String,
    tag_list: Vec<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    favorited: bool,
    favorites_count: i64,
    author_username: String,
    author_bio: Option<String>,
    author_image: Option<String>,
    author_following: bool,
}

impl From<ArticleViewRow> for ArticleView {
    fn from(row: ArticleViewRow) -> Self {
        Self {
            slug: row.slug,
            title: row.title,
            description: row.description,
            body: row.body,
            tag_list: row.tag_list,
            created_at: row.created_at,
            updated_at: row.updated_at,
            favorited: row.favorited,
            favorites_count: row.favorites_count,
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
impl ArticleQueries for PostgresArticleQueries {
    async fn find_by_slug(
        &self,
        slug: &str,
        viewer: Option<UserId>,
    ) -> ApplicationResult<Option<ArticleView>> {
        let mut builder = Self::select(viewer);
        builder.push(" WHERE a.slug = ");
        builder.push_bind(slug.to_owned());

        let row = builder
            .build_query_as::<ArticleViewRow>()
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;

        Ok(row.map(Into::into))
    }

    async fn list(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
        viewer: Option<UserId>,
    ) -> ApplicationResult<Vec<ArticleView>> {
        let mut builder = Self::select(viewer);
        Self::apply_filter(&mut builder, filter);
        Self::apply_page(&mut builder, page);
        self.fetch_all(builder).await
    }

    async fn feed(&self, viewer: UserId, page: PageRequest) -> ApplicationResult<Vec<ArticleView>> {
        let mut builder = Self::select(Some(viewer));
        builder.push(" WHERE a.author_id IN (SELECT followee_id FROM followers WHERE follower_id = ");
        builder.push_bind(i64::from(viewer));
        builder.push(")");
        Self::apply_page(&mut builder, page);
        self.fetch_all(builder).await
    }
}
