// src/domain/user/repository.rs
use crate::domain::errors::DomainResult;
use crate::domain::user::{
    entity::{NewUser, User},
    value_objects::{Email, UserId, Username},
};
use async_trait::async_trait;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, new_user: NewUser) -> DomainResult<User>;

    async fn update(&self, user: User) -> DomainResult<User>;

    async fn find_by_id(&self, id: UserId) -> DomainResult<Option<User>>;

    async fn find_by_email(&self, email: &Email) -> DomainResult<Option<User>>;

    async fn find_by_username(&self, username: &Username) -> DomainResult<Option<User>>;

    async fn exists_by_email(&self, email: &Email) -> DomainResult<bool>;

    async fn exists_by_username(&self, username: &Username) -> DomainResult<bool>;
}

/// Follow edges between users. Both operations are idempotent.
#[async_trait]
pub trait FollowRepository: Send + Sync {
    async fn follow(&self, follower: UserId, followee: UserId) -> DomainResult<()>;

    async fn unfollow(&self, follower: UserId, followee: UserId) -> DomainResult<()>;

    async fn is_following(&self, follower: UserId, followee: UserId) -> DomainResult<bool>;
}
