// src/application/queries/articles/list.rs
use super::ArticleQueryService;
use crate::application::{
    dto::{ArticleView, PageRequest},
    error::ApplicationResult,
    ports::queries::ArticleFilter,
    security::SecurityContext,
};

#[derive(Debug, Clone, Default)]
pub struct ListArticlesQuery {
    pub tag: Option<String>,
    pub author: Option<String>,
    /// Username whose favorites to list.
    pub favorited: Option<String>,
    pub limit: u32,
    pub offset: u32,
}

impl ArticleQueryService {
    /// Newest first; all supplied filters must match.
    pub async fn get_articles(
        &self,
        ctx: &SecurityContext,
        query: ListArticlesQuery,
    ) -> ApplicationResult<Vec<ArticleView>> {
        let filter = ArticleFilter {
            tag: non_blank(query.tag),
            author: non_blank(query.author),
            favorited_by: non_blank(query.favorited),
        };
        let page = PageRequest::new(query.limit, query.offset);

        self.queries
            .list(&filter, page, ctx.current_user_id())
            .await
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
