// src/application/commands/users/register.rs
use super::{UserCommandService, password::check_password};
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult, FieldErrors},
    },
    domain::user::{Email, NewUser, PasswordHash, Username},
};

pub struct RegisterUserCommand {
    pub email: String,
    pub username: String,
    pub password: String,
}

impl UserCommandService {
    /// Every rule violation is reported together in one `Validation` error.
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let mut errors = FieldErrors::new();

        let email = errors.collect(Email::new(command.email))?;
        if let Some(email) = &email {
            if self.user_repo.exists_by_email(email).await? {
                errors.add("email", "is already taken");
            }
        }

        let username = errors.collect(Username::new(command.username))?;
        if let Some(username) = &username {
            if self.user_repo.exists_by_username(username).await? {
                errors.add("username", "is already taken");
            }
        }

        check_password(&command.password, &mut errors);

        let (Some(email), Some(username)) = (email, username) else {
            return Err(ApplicationError::Validation(errors));
        };
        errors.into_result()?;

        let hashed = self.password_hasher.hash(&command.password).await?;
        let password_hash = PasswordHash::new(hashed)?;
        let new_user = NewUser::new(email, username, password_hash, self.clock.now());
        let user = self.user_repo.insert(new_user).await?;

        tracing::info!(
            user_id = i64::from(user.id),
            username = %user.username,
            "user registered"
        );
        Ok(user.into())
    }
}
