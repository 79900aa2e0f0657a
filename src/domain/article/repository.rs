// src/domain/article/repository.rs
use crate::domain::article::entity::{Article, NewArticle};
use crate::domain::article::value_objects::{ArticleId, ArticleSlug, TagName};
use crate::domain::errors::DomainResult;
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Write side of the Article aggregate: the article row, its tag set and its
/// favorite edges.
#[async_trait]
pub trait ArticleRepository: Send + Sync {
    /// Persists the article together with its tags in one transaction.
    async fn insert(&self, article: NewArticle) -> DomainResult<Article>;

    /// Persists content and tag set; associations missing from the new set are removed first.
    async fn update(&self, article: Article) -> DomainResult<Article>;

    async fn find_by_id(&self, id: ArticleId) -> DomainResult<Option<Article>>;

    async fn find_by_slug(&self, slug: &ArticleSlug) -> DomainResult<Option<Article>>;

    /// True if another article (not `excluding`) already owns `slug`.
    async fn slug_exists(
        &self,
        slug: &str,
        excluding: Option<ArticleId>,
    ) -> DomainResult<bool>;

    /// Removes tag associations, favorite edges, comments and the article, in that order.
    async fn delete(&self, id: ArticleId) -> DomainResult<()>;

    async fn favorite(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<()>;

    async fn unfavorite(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<()>;

    async fn is_favorited(&self, article_id: ArticleId, user_id: UserId) -> DomainResult<bool>;

    /// Every known tag name, sorted.
    async fn all_tags(&self) -> DomainResult<Vec<TagName>>;
}
