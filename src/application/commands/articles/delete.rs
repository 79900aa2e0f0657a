// src/application/commands/articles/delete.rs
use super::ArticleCommandService;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        security::SecurityContext,
    },
    domain::article::specifications::{ArticleSpecification, CanModifyArticleSpec},
};

impl ArticleCommandService {
    pub async fn delete_article(&self, ctx: &SecurityContext, slug: &str) -> ApplicationResult<()> {
        let user_id = ctx.require_user()?;
        let article = self.load_by_slug(slug).await?;

        if !CanModifyArticleSpec::new(&article, user_id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "you can only delete your own articles",
            ));
        }

        self.repo.delete(article.id).await?;
        tracing::info!(
            article_id = i64::from(article.id),
            slug = %article.slug,
            "article deleted"
        );
        Ok(())
    }
}
