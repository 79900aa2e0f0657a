// src/application/commands/articles/favorite.rs
use super::ArticleCommandService;
use crate::application::{error::ApplicationResult, security::SecurityContext};

impl ArticleCommandService {
    /// Idempotent: favoriting an already favorited article changes nothing.
    pub async fn favorite_article(&self, ctx: &SecurityContext, slug: &str) -> ApplicationResult<()> {
        let user_id = ctx.require_user()?;
        let article = self.load_by_slug(slug).await?;
        self.repo.favorite(article.id, user_id).await?;
        tracing::debug!(article_id = i64::from(article.id), user_id = i64::from(user_id), "favorited");
        Ok(())
    }

    pub async fn unfavorite_article(
        &self,
        ctx: &SecurityContext,
        slug: &str,
    ) -> ApplicationResult<()> {
        let user_id = ctx.require_user()?;
        let article = self.load_by_slug(slug).await?;
        self.repo.unfavorite(article.id, user_id).await?;
        tracing::debug!(article_id = i64::from(article.id), user_id = i64::from(user_id), "unfavorited");
        Ok(())
    }
}
