// src/application/ports/security.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;

/// Password hashing primitive supplied by the host application.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> ApplicationResult<String>;
    /// Fails with `Unauthorized` when `password` does not match `expected_hash`.
    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()>;
}
