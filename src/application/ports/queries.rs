// src/application/ports/queries.rs
//! Read-side ports. Implementations may join and denormalise freely but must
//! never write.
use crate::application::{
    ApplicationResult,
    dto::{ArticleView, CommentView, PageRequest, ProfileView},
};
use crate::domain::user::UserId;
use async_trait::async_trait;

/// Filters for article listings; every present filter must match.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArticleFilter {
    pub tag: Option<String>,
    pub author: Option<String>,
    pub favorited_by: Option<String>,
}

#[async_trait]
pub trait ArticleQueries: Send + Sync {
    async fn find_by_slug(
        &self,
        slug: &str,
        viewer: Option<UserId>,
    ) -> ApplicationResult<Option<ArticleView>>;

    /// Newest first.
    async fn list(
        &self,
        filter: &ArticleFilter,
        page: PageRequest,
        viewer: Option<UserId>,
    ) -> ApplicationResult<Vec<ArticleView>>;

    /// Articles by authors `viewer` follows, newest first.
    async fn feed(&self, viewer: UserId, page: PageRequest) -> ApplicationResult<Vec<ArticleView>>;
}

#[async_trait]
pub trait CommentQueries: Send + Sync {
    /// `None` when no article has `slug`; comments are oldest first.
    async fn list_by_article_slug(
        &self,
        slug: &str,
        viewer: Option<UserId>,
    ) -> ApplicationResult<Option<Vec<CommentView>>>;

    async fn find_by_id(
        &self,
        comment_id: i64,
        viewer: Option<UserId>,
    ) -> ApplicationResult<Option<CommentView>>;
}

#[async_trait]
pub trait ProfileQueries: Send + Sync {
    async fn find_by_username(
        &self,
        username: &str,
        viewer: Option<UserId>,
    ) -> ApplicationResult<Option<ProfileView>>;
}
