// src/application/security.rs
use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::user::UserId;

/// Identity of the caller for a single request. Built by the transport layer
/// after token verification and passed explicitly into every service call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SecurityContext {
    current_user_id: Option<UserId>,
}

impl SecurityContext {
    pub fn anonymous() -> Self {
        Self {
            current_user_id: None,
        }
    }

    pub fn authenticated(user_id: UserId) -> Self {
        Self {
            current_user_id: Some(user_id),
        }
    }

    pub fn current_user_id(&self) -> Option<UserId> {
        self.current_user_id
    }

    /// The caller's id, or `Unauthorized` for anonymous requests.
    pub fn require_user(&self) -> ApplicationResult<UserId> {
        self.current_user_id
            .ok_or_else(|| ApplicationError::unauthorized("authentication required"))
    }
}
