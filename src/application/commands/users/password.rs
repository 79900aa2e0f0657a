// src/application/commands/users/password.rs
use crate::application::error::FieldErrors;

pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Records a `password` field error when `password` is too short.
pub(super) fn check_password(password: &str, errors: &mut FieldErrors) {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        errors.add(
            "password",
            format!("must be at least {MIN_PASSWORD_LENGTH} characters"),
        );
    }
}
