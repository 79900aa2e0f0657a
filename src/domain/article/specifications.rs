// src/domain/article/specifications.rs
use crate::domain::article::entity::Article;
use crate::domain::user::UserId;

pub trait ArticleSpecification {
    fn is_satisfied(&self) -> bool;
}

/// Only the author may update or delete an article.
pub struct CanModifyArticleSpec<'a> {
    article: &'a Article,
    user_id: UserId,
}

impl<'a> CanModifyArticleSpec<'a> {
    pub fn new(article: &'a Article, user_id: UserId) -> Self {
        Self { article, user_id }
    }
}

impl ArticleSpecification for CanModifyArticleSpec<'_> {
    fn is_satisfied(&self) -> bool {
        self.article.is_authored_by(self.user_id)
    }
}
