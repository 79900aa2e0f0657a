// src/application/commands/articles/update.rs
use super::ArticleCommandService;
use crate::{
    application::{
        commands::FieldUpdate,
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult, FieldErrors},
        security::SecurityContext,
    },
    domain::article::{
        ArticleBody, ArticleDescription, ArticleRevision, ArticleTitle, TagSet,
        specifications::{ArticleSpecification, CanModifyArticleSpec},
    },
};

#[derive(Debug, Clone, Default)]
pub struct UpdateArticleCommand {
    pub title: FieldUpdate,
    pub description: FieldUpdate,
    pub body: FieldUpdate,
    /// `None` keeps the current tags; `Some` replaces the whole set.
    pub tags: Option<Vec<String>>,
}

impl ArticleCommandService {
    pub async fn update_article(
        &self,
        ctx: &SecurityContext,
        slug: &str,
        command: UpdateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let user_id = ctx.require_user()?;
        let article = self.load_by_slug(slug).await?;

        if !CanModifyArticleSpec::new(&article, user_id).is_satisfied() {
            return Err(ApplicationError::forbidden(
                "you can only update your own articles",
            ));
        }

        let UpdateArticleCommand {
            title,
            description,
            body,
            tags,
        } = command;

        let title_changed = title
            .as_value()
            .is_some_and(|value| value != article.title.as_str());

        let mut errors = FieldErrors::new();
        let title = errors.collect(ArticleTitle::new(title.or_keep(article.title.as_str())))?;
        let description = errors.collect(ArticleDescription::new(
            description.or_keep(article.description.as_str()),
        ))?;
        let body = errors.collect(ArticleBody::new(body.or_keep(article.body.as_str())))?;
        let tags = match tags {
            Some(names) => errors.collect(TagSet::parse(names))?,
            None => Some(article.tags.clone()),
        };

        let (Some(title), Some(description), Some(body), Some(tags)) =
            (title, description, body, tags)
        else {
            return Err(ApplicationError::Validation(errors));
        };

        let slug = if title_changed {
            self.slug_service.slug_for(&title, Some(article.id)).await?
        } else {
            article.slug.clone()
        };

        let revised = article.revise(
            ArticleRevision {
                slug,
                title,
                description,
                body,
                tags,
            },
            self.clock.now(),
        );

        let updated = self.repo.update(revised).await?;
        tracing::info!(
            article_id = i64::from(updated.id),
            slug = %updated.slug,
            "article updated"
        );
        Ok(updated.into())
    }
}
