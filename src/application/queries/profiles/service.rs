// src/application/queries/profiles/service.rs
use std::sync::Arc;

use crate::application::ports::queries::ProfileQueries;

pub struct ProfileQueryService {
    pub(super) queries: Arc<dyn ProfileQueries>,
}

impl ProfileQueryService {
    pub fn new(queries: Arc<dyn ProfileQueries>) -> Self {
        Self { queries }
    }
}
