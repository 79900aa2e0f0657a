// src/infrastructure/queries/mod.rs
//! Postgres adapters for the read-side ports. Each projection is assembled
//! in a single statement; the viewer id is bound as a nullable BIGINT so
//! anonymous reads see every viewer-relative flag as false.
mod postgres_article_queries;
mod postgres_comment_queries;
mod postgres_profile_queries;

pub use postgres_article_queries::PostgresArticleQueries;
pub use postgres_comment_queries::PostgresCommentQueries;
pub use postgres_profile_queries::PostgresProfileQueries;
