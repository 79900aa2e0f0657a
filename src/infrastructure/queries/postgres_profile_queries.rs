// src/infrastructure/queries/postgres_profile_queries.rs
use crate::application::{ApplicationResult, dto::ProfileView, ports::queries::ProfileQueries};
use crate::domain::user::UserId;
use crate::infrastructure::repositories::map_sqlx;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresProfileQueries {
    pool: PgPool,
}

impl PostgresProfileQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct ProfileRow {
    username: String,
    bio: Option<String>,
    image: Option<String>,
    following: bool,
}

#[async_trait]
impl ProfileQueries for PostgresProfileQueries {
    async fn find_by_username(
        &self,
        username: &str,
        viewer: Option<UserId>,
    ) -> ApplicationResult<Option<ProfileView>> {
        let row = sqlx::query_as::<_, ProfileRow>(
            "SELECT u.username, u.bio, u.image,
                    EXISTS (SELECT 1 FROM followers fo
                            WHERE fo.followee_id = u.id AND fo.follower_id = $2) AS following
             FROM users u WHERE u.username = $1",
        )
        .bind(username)
        .bind(viewer.map(i64::from))
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;

        Ok(row.map(|row| ProfileView {
            username: row.username,
            bio: row.bio,
            image: row.image,
            following: row.following,
        }))
    }
}
