// src/application/commands/users/update.rs
use super::{UserCommandService, password::check_password};
use crate::{
    application::{
        commands::FieldUpdate,
        dto::UserDto,
        error::{ApplicationError, ApplicationResult, FieldErrors},
        security::SecurityContext,
    },
    domain::user::{Email, PasswordHash, ProfileChanges, Username},
};

#[derive(Debug, Clone, Default)]
pub struct UpdateUserCommand {
    pub email: FieldUpdate,
    pub username: FieldUpdate,
    pub password: FieldUpdate,
    /// Blank clears the bio.
    pub bio: FieldUpdate,
    /// Blank clears the image.
    pub image: FieldUpdate,
}

impl UserCommandService {
    pub async fn update_user(
        &self,
        ctx: &SecurityContext,
        command: UpdateUserCommand,
    ) -> ApplicationResult<UserDto> {
        let user = self.load_current(ctx).await?;
        let mut errors = FieldErrors::new();

        let email = match command.email.as_value() {
            Some(raw) => errors.collect(Email::new(raw))?,
            None => Some(user.email.clone()),
        };
        if let Some(email) = email.as_ref().filter(|email| **email != user.email) {
            if self.user_repo.exists_by_email(email).await? {
                errors.add("email", "is already taken");
            }
        }

        let username = match command.username.as_value() {
            Some(raw) => errors.collect(Username::new(raw))?,
            None => Some(user.username.clone()),
        };
        if let Some(username) = username.as_ref().filter(|name| **name != user.username) {
            if self.user_repo.exists_by_username(username).await? {
                errors.add("username", "is already taken");
            }
        }

        let password = command.password.as_value().map(str::to_owned);
        if let Some(password) = &password {
            check_password(password, &mut errors);
        }

        let (Some(email), Some(username)) = (email, username) else {
            return Err(ApplicationError::Validation(errors));
        };
        errors.into_result()?;

        let now = self.clock.now();
        let mut updated = user.with_profile(
            ProfileChanges {
                email,
                username,
                bio: command.bio.or_keep_optional(user.bio.clone()),
                image: command.image.or_keep_optional(user.image.clone()),
            },
            now,
        );
        if let Some(password) = password {
            let hashed = self.password_hasher.hash(&password).await?;
            updated = updated.with_password(PasswordHash::new(hashed)?, now);
        }

        let saved = self.user_repo.update(updated).await?;
        tracing::info!(user_id = i64::from(saved.id), "user updated");
        Ok(saved.into())
    }
}
