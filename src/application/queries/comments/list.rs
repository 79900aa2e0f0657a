// src/application/queries/comments/list.rs
use super::CommentQueryService;
use crate::application::{
    dto::CommentView,
    error::{ApplicationError, ApplicationResult},
    security::SecurityContext,
};

impl CommentQueryService {
    /// Comments on the article, oldest first.
    pub async fn get_comments_by_slug(
        &self,
        ctx: &SecurityContext,
        slug: &str,
    ) -> ApplicationResult<Vec<CommentView>> {
        self.queries
            .list_by_article_slug(slug, ctx.current_user_id())
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
