// tests/support/helpers.rs
use std::sync::Arc;

use super::builders::{article, registration};
use super::mocks::{InMemoryStore, StrictPasswordHasher, TickingClock};
use conduit_core::application::{
    ApplicationError,
    dto::ArticleDto,
    security::SecurityContext,
    services::{ApplicationServices, QueryPorts, Repositories},
};
use conduit_core::domain::user::UserId;
use conduit_core::infrastructure::util::DefaultSlugGenerator;

/// Fully wired services over one in-memory store.
pub struct TestApp {
    pub store: Arc<InMemoryStore>,
    pub services: ApplicationServices,
}

impl TestApp {
    pub fn new() -> Self {
        let store = Arc::new(InMemoryStore::new());
        let repositories = Repositories {
            users: store.clone(),
            follows: store.clone(),
            articles: store.clone(),
            comments: store.clone(),
        };
        let queries = QueryPorts {
            articles: store.clone(),
            comments: store.clone(),
            profiles: store.clone(),
        };
        let services = ApplicationServices::new(
            repositories,
            queries,
            Arc::new(StrictPasswordHasher),
            Arc::new(TickingClock::default()),
            Arc::new(DefaultSlugGenerator),
        );
        Self { store, services }
    }

    /// Registers `username` and returns a context authenticated as them.
    pub async fn sign_up(&self, username: &str) -> SecurityContext {
        let user = self
            .services
            .user_commands
            .register(registration(username))
            .await
            .expect("registration succeeds");
        SecurityContext::authenticated(UserId::new(user.id).expect("positive id"))
    }

    pub async fn publish(&self, ctx: &SecurityContext, title: &str) -> ArticleDto {
        self.services
            .article_commands
            .create_article(ctx, article(title))
            .await
            .expect("article is created")
    }
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

/// Field names carried by a `Validation` error; panics on any other error.
pub fn validation_fields(err: &ApplicationError) -> Vec<String> {
    match err {
        ApplicationError::Validation(errors) => {
            let json = serde_json::to_value(errors).expect("field errors serialize");
            json.as_object()
                .map(|fields| fields.keys().cloned().collect())
                .unwrap_or_default()
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}
