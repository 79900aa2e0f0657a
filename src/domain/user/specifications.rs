// src/domain/user/specifications.rs
use crate::domain::user::value_objects::UserId;

pub trait FollowSpecification {
    fn is_satisfied(&self) -> bool;
}

/// A user may follow anyone except themselves.
pub struct CanFollowSpec {
    follower: UserId,
    followee: UserId,
}

impl CanFollowSpec {
    pub fn new(follower: UserId, followee: UserId) -> Self {
        Self { follower, followee }
    }
}

impl FollowSpecification for CanFollowSpec {
    fn is_satisfied(&self) -> bool {
        self.follower != self.followee
    }
}
