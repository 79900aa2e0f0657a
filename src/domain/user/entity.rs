// src/domain/user/entity.rs
use crate::domain::user::value_objects::{Email, PasswordHash, UserId, Username};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub username: Username,
    pub password_hash: PasswordHash,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Profile fields resolved by the caller; every field holds the final value.
#[derive(Debug, Clone)]
pub struct ProfileChanges {
    pub email: Email,
    pub username: Username,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl User {
    pub fn with_profile(&self, changes: ProfileChanges, now: DateTime<Utc>) -> Self {
        Self {
            email: changes.email,
            username: changes.username,
            bio: changes.bio,
            image: changes.image,
            updated_at: now,
            ..self.clone()
        }
    }

    pub fn with_password(&self, password_hash: PasswordHash, now: DateTime<Utc>) -> Self {
        Self {
            password_hash,
            updated_at: now,
            ..self.clone()
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub username: Username,
    pub password_hash: PasswordHash,
    pub created_at: DateTime<Utc>,
}

impl NewUser {
    pub fn new(
        email: Email,
        username: Username,
        password_hash: PasswordHash,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            email,
            username,
            password_hash,
            created_at,
        }
    }
}
