// src/application/commands/users/current.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
        security::SecurityContext,
    },
    domain::user::User,
};

impl UserCommandService {
    pub async fn current_user(&self, ctx: &SecurityContext) -> ApplicationResult<UserDto> {
        self.load_current(ctx).await.map(Into::into)
    }

    pub(super) async fn load_current(&self, ctx: &SecurityContext) -> ApplicationResult<User> {
        let user_id = ctx.require_user()?;
        self.user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("user not found"))
    }
}
