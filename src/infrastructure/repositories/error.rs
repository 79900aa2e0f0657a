// src/infrastructure/repositories/error.rs
use crate::domain::errors::DomainError;

const CNT_ARTICLE_SLUG: &str = "articles_slug_key";
const CNT_ARTICLE_AUTHOR: &str = "articles_author_id_fkey";
const CNT_COMMENT_ARTICLE: &str = "comments_article_id_fkey";
const CNT_COMMENT_AUTHOR: &str = "comments_author_id_fkey";
const CNT_USER_EMAIL: &str = "users_email_key";
const CNT_USER_USERNAME: &str = "users_username_key";
const CNT_FOLLOW_SELF: &str = "followers_not_self_chk";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(constraint) = db_err.constraint() {
                return map_constraint(constraint);
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}

fn map_constraint(constraint: &str) -> DomainError {
    match constraint {
        CNT_ARTICLE_SLUG => DomainError::Conflict("slug already exists".into()),
        CNT_USER_EMAIL => DomainError::Conflict("email already exists".into()),
        CNT_USER_USERNAME => DomainError::Conflict("username already exists".into()),
        CNT_ARTICLE_AUTHOR | CNT_COMMENT_AUTHOR => DomainError::NotFound("author not found".into()),
        CNT_COMMENT_ARTICLE => DomainError::NotFound("article not found".into()),
        CNT_FOLLOW_SELF => DomainError::Rejected("cannot follow yourself".into()),
        other => DomainError::Persistence(format!("database constraint violation: {other}")),
    }
}
