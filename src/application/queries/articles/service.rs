// src/application/queries/articles/service.rs
use std::sync::Arc;

use crate::application::ports::queries::ArticleQueries;

/// Read side for articles. Every projection is relative to the caller in the
/// `SecurityContext`; anonymous callers see `favorited` and `following` as false.
pub struct ArticleQueryService {
    pub(super) queries: Arc<dyn ArticleQueries>,
}

impl ArticleQueryService {
    pub fn new(queries: Arc<dyn ArticleQueries>) -> Self {
        Self { queries }
    }
}
