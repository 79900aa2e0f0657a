// src/application/queries/comments/service.rs
use std::sync::Arc;

use crate::application::ports::queries::CommentQueries;

pub struct CommentQueryService {
    pub(super) queries: Arc<dyn CommentQueries>,
}

impl CommentQueryService {
    pub fn new(queries: Arc<dyn CommentQueries>) -> Self {
        Self { queries }
    }
}
