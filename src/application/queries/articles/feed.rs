// src/application/queries/articles/feed.rs
use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleView, PageRequest},
    error::ApplicationResult,
    security::SecurityContext,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct FeedArticlesQuery {
    pub limit: u32,
    pub offset: u32,
}

impl ArticleQueryService {
    /// Articles written by authors the caller follows, newest first.
    pub async fn get_articles_feed(
        &self,
        ctx: &SecurityContext,
        query: FeedArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleView>> {
        let viewer = ctx.require_user()?;
        self.queries
            .feed(viewer, PageRequest::new(query.limit, query.offset))
            .await
    }
}
