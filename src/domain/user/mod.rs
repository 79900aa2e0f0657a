// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod specifications;
pub mod value_objects;

pub use entity::{NewUser, ProfileChanges, User};
pub use repository::{FollowRepository, UserRepository};
pub use value_objects::{Email, PasswordHash, UserId, Username};
