// src/application/commands/comments/service.rs
use std::sync::Arc;

use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        ports::time::Clock,
    },
    domain::{
        article::{Article, ArticleRepository, ArticleSlug},
        comment::CommentRepository,
    },
};

pub struct CommentCommandService {
    pub(super) article_repo: Arc<dyn ArticleRepository>,
    pub(super) comment_repo: Arc<dyn CommentRepository>,
    pub(super) clock: Arc<dyn Clock>,
}

impl CommentCommandService {
    pub fn new(
        article_repo: Arc<dyn ArticleRepository>,
        comment_repo: Arc<dyn CommentRepository>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            article_repo,
            comment_repo,
            clock,
        }
    }

    pub(super) async fn load_article(&self, slug: &str) -> ApplicationResult<Article> {
        let Ok(slug) = ArticleSlug::new(slug) else {
            return Err(ApplicationError::not_found("article not found"));
        };
        self.article_repo
            .find_by_slug(&slug)
            .await?
            .ok_or_else(|| ApplicationError::not_found("article not found"))
    }
}
