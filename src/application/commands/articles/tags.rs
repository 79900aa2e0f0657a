// src/application/commands/articles/tags.rs
use super::ArticleCommandService;
use crate::application::{dto::TagsDto, error::ApplicationResult};

impl ArticleCommandService {
    /// Whole tag vocabulary, sorted. Open to anonymous callers.
    pub async fn get_all_tags(&self) -> ApplicationResult<TagsDto> {
        let mut tags = self.repo.all_tags().await?;
        tags.sort();
        tags.dedup();
        Ok(tags.into())
    }
}
