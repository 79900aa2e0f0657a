// src/application/queries/articles/get_by_slug.rs
use super::ArticleQueryService;
use crate::application::{
    dto::ArticleView,
    error::{ApplicationError, ApplicationResult},
    security::SecurityContext,
};

pub struct GetArticleBySlugQuery {
    pub slug: String,
}

impl ArticleQueryService {
    pub async fn get_article_by_slug(
        &self,
        ctx: &SecurityContext,
        query: GetArticleBySlugQuery,
    ) -> ApplicationResult<ArticleView> {
        self.queries
            .find_by_slug(&query.slug, ctx.current_user_id())
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
