// src/application/commands/articles/create.rs
use super::ArticleCommandService;
use crate::{
    application::{
        dto::ArticleDto,
        error::{ApplicationError, ApplicationResult, FieldErrors},
        security::SecurityContext,
    },
    domain::article::{ArticleBody, ArticleDescription, ArticleTitle, NewArticle, TagSet},
};

pub struct CreateArticleCommand {
    pub title: String,
    pub description: String,
    pub body: String,
    pub tags: Vec<String>,
}

impl CreateArticleCommand {
    pub fn builder() -> CreateArticleCommandBuilder {
        CreateArticleCommandBuilder::default()
    }
}

#[derive(Default)]
pub struct CreateArticleCommandBuilder {
    title: Option<String>,
    description: Option<String>,
    body: Option<String>,
    tags: Vec<String>,
}

impl CreateArticleCommandBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Result<CreateArticleCommand, &'static str> {
        Ok(CreateArticleCommand {
            title: self.title.ok_or("title is required")?,
            description: self.description.ok_or("description is required")?,
            body: self.body.ok_or("body is required")?,
            tags: self.tags,
        })
    }
}

impl ArticleCommandService {
    pub async fn create_article(
        &self,
        ctx: &SecurityContext,
        command: CreateArticleCommand,
    ) -> ApplicationResult<ArticleDto> {
        let author_id = ctx.require_user()?;

        let mut errors = FieldErrors::new();
        let title = errors.collect(ArticleTitle::new(command.title))?;
        let description = errors.collect(ArticleDescription::new(command.description))?;
        let body = errors.collect(ArticleBody::new(command.body))?;
        let tags = errors.collect(TagSet::parse(command.tags))?;

        let (Some(title), Some(description), Some(body), Some(tags)) =
            (title, description, body, tags)
        else {
            return Err(ApplicationError::Validation(errors));
        };

        let slug = self.slug_service.slug_for(&title, None).await?;
        let now = self.clock.now();

        let new_article = NewArticle {
            slug,
            title,
            description,
            body,
            author_id,
            tags,
            created_at: now,
            updated_at: now,
        };

        let created = self.repo.insert(new_article).await?;
        tracing::info!(
            article_id = i64::from(created.id),
            slug = %created.slug,
            author_id = i64::from(author_id),
            "article created"
        );
        Ok(created.into())
    }
}
