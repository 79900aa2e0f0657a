use conduit_core::application::{
    ports::{security::PasswordHasher, time::Clock, util::SlugGenerator},
    services::{ApplicationServices, QueryPorts, Repositories},
};
use conduit_core::config::AppConfig;
use conduit_core::infrastructure::{
    database,
    queries::{PostgresArticleQueries, PostgresCommentQueries, PostgresProfileQueries},
    repositories::{
        PostgresArticleRepository, PostgresCommentRepository, PostgresFollowRepository,
        PostgresUserRepository,
    },
    security::Argon2PasswordHasher,
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use anyhow::Result;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

/// Connects, migrates and wires every service once, so a deployment can
/// verify its database and configuration before a host process embeds the core.
async fn bootstrap() -> Result<()> {
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url(), config.database_max_connections()).await?;
    if config.run_migrations() {
        database::run_migrations(&pool).await?;
        tracing::info!("migrations applied");
    }

    let repositories = Repositories {
        users: Arc::new(PostgresUserRepository::new(pool.clone())),
        follows: Arc::new(PostgresFollowRepository::new(pool.clone())),
        articles: Arc::new(PostgresArticleRepository::new(pool.clone())),
        comments: Arc::new(PostgresCommentRepository::new(pool.clone())),
    };
    let queries = QueryPorts {
        articles: Arc::new(PostgresArticleQueries::new(pool.clone())),
        comments: Arc::new(PostgresCommentQueries::new(pool.clone())),
        profiles: Arc::new(PostgresProfileQueries::new(pool.clone())),
    };

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher);
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator);

    let services = ApplicationServices::new(repositories, queries, password_hasher, clock, slugger);

    let tags = services.article_commands.get_all_tags().await?;
    tracing::info!(
        max_connections = config.database_max_connections(),
        known_tags = tags.tags.len(),
        "conduit core ready"
    );

    pool.close().await;
    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}
