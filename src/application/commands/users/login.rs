// src/application/commands/users/login.rs
use super::UserCommandService;
use crate::{
    application::{
        dto::UserDto,
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Email,
};

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

const INVALID_CREDENTIALS: &str = "invalid email or password";

impl UserCommandService {
    /// Verifies credentials. Token minting is left to the host.
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<UserDto> {
        // Malformed and unknown emails fail the same way as a wrong password.
        let Ok(email) = Email::new(command.email) else {
            return Err(ApplicationError::unauthorized(INVALID_CREDENTIALS));
        };

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized(INVALID_CREDENTIALS))?;

        self.password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await
            .map_err(|err| match err {
                ApplicationError::Unauthorized(_) => {
                    ApplicationError::unauthorized(INVALID_CREDENTIALS)
                }
                other => other,
            })?;

        tracing::debug!(user_id = i64::from(user.id), "login succeeded");
        Ok(user.into())
    }
}
