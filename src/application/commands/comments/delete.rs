// src/application/commands/comments/delete.rs
use super::CommentCommandService;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        security::SecurityContext,
    },
    domain::comment::CommentId,
};

impl CommentCommandService {
    pub async fn delete_comment(
        &self,
        ctx: &SecurityContext,
        article_slug: &str,
        comment_id: i64,
    ) -> ApplicationResult<()> {
        let user_id = ctx.require_user()?;
        let article = self.load_article(article_slug).await?;

        let Ok(comment_id) = CommentId::new(comment_id) else {
            return Err(ApplicationError::not_found("comment not found"));
        };
        // A comment addressed through another article's slug is reported as missing.
        let comment = self
            .comment_repo
            .find_by_id(comment_id)
            .await?
            .filter(|comment| comment.belongs_to(article.id))
            .ok_or_else(|| ApplicationError::not_found("comment not found"))?;

        if !comment.can_be_deleted_by(user_id) {
            return Err(ApplicationError::forbidden(
                "you can only delete your own comments",
            ));
        }

        self.comment_repo.delete(comment.id).await?;
        tracing::info!(
            comment_id = i64::from(comment.id),
            article_id = i64::from(article.id),
            "comment deleted"
        );
        Ok(())
    }
}
