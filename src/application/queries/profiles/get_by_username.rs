// src/application/queries/profiles/get_by_username.rs
use super::ProfileQueryService;
use crate::application::{
    dto::ProfileView,
    error::{ApplicationError, ApplicationResult},
    security::SecurityContext,
};

impl ProfileQueryService {
    pub async fn get_profile_by_username(
        &self,
        ctx: &SecurityContext,
        username: &str,
    ) -> ApplicationResult<ProfileView> {
        self.queries
            .find_by_username(username.trim(), ctx.current_user_id())
            .await?
            .ok_or_else(|| ApplicationError::not_found("profile not found"))
    }
}
