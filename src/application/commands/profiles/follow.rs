// src/application/commands/profiles/follow.rs
use super::ProfileCommandService;
use crate::{
    application::{
        error::{ApplicationError, ApplicationResult},
        security::SecurityContext,
    },
    domain::user::specifications::{CanFollowSpec, FollowSpecification},
};

impl ProfileCommandService {
    pub async fn follow_user(&self, ctx: &SecurityContext, username: &str) -> ApplicationResult<()> {
        let follower = ctx.require_user()?;
        let followee = self.load_profile(username).await?;

        if !CanFollowSpec::new(follower, followee.id).is_satisfied() {
            return Err(ApplicationError::bad_request("cannot follow yourself"));
        }

        self.follow_repo.follow(follower, followee.id).await?;
        tracing::info!(
            follower_id = i64::from(follower),
            followee_id = i64::from(followee.id),
            "user followed"
        );
        Ok(())
    }

    pub async fn unfollow_user(&self, ctx: &SecurityContext, username: &str) -> ApplicationResult<()> {
        let follower = ctx.require_user()?;
        let followee = self.load_profile(username).await?;

        self.follow_repo.unfollow(follower, followee.id).await?;
        tracing::info!(
            follower_id = i64::from(follower),
            followee_id = i64::from(followee.id),
            "user unfollowed"
        );
        Ok(())
    }
}
