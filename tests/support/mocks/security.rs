// tests/support/mocks/security.rs
use async_trait::async_trait;
use conduit_core::application::{
    ApplicationResult, error::ApplicationError, ports::security::PasswordHasher,
};

/// 厳密なパスワードハッシャー: "hash::<password>" を保存し、照合する
#[derive(Clone, Debug, Default)]
pub struct StrictPasswordHasher;

#[async_trait]
impl PasswordHasher for StrictPasswordHasher {
    async fn hash(&self, password: &str) -> ApplicationResult<String> {
        Ok(format!("hash::{password}"))
    }

    async fn verify(&self, password: &str, expected_hash: &str) -> ApplicationResult<()> {
        if format!("hash::{password}") == expected_hash {
            Ok(())
        } else {
            Err(ApplicationError::unauthorized("bad password"))
        }
    }
}
