// src/application/queries/comments/get_by_id.rs
use super::CommentQueryService;
use crate::application::{
    dto::CommentView,
    error::{ApplicationError, ApplicationResult},
    security::SecurityContext,
};

impl CommentQueryService {
    pub async fn get_comment_by_id(
        &self,
        ctx: &SecurityContext,
        comment_id: i64,
    ) -> ApplicationResult<CommentView> {
        self.queries
            .find_by_id(comment_id, ctx.current_user_id())
            .await?
            .ok_or_else(|| ApplicationError::not_found("comment not found"))
    }
}
