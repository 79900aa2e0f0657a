// src/application/commands/comments/add.rs
use super::CommentCommandService;
use crate::{
    application::{dto::CommentDto, error::ApplicationResult, security::SecurityContext},
    domain::comment::{CommentBody, NewComment},
};

pub struct AddCommentCommand {
    pub body: String,
}

impl CommentCommandService {
    pub async fn add_comment(
        &self,
        ctx: &SecurityContext,
        article_slug: &str,
        command: AddCommentCommand,
    ) -> ApplicationResult<CommentDto> {
        let author_id = ctx.require_user()?;
        let article = self.load_article(article_slug).await?;
        let body = CommentBody::new(command.body)?;

        let comment = self
            .comment_repo
            .insert(NewComment::new(article.id, author_id, body, self.clock.now()))
            .await?;

        tracing::info!(
            comment_id = i64::from(comment.id),
            article_id = i64::from(article.id),
            author_id = i64::from(author_id),
            "comment added"
        );
        Ok(comment.into())
    }
}
