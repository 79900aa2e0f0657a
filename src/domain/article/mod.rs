// src/domain/article/mod.rs
pub mod entity;
pub mod repository;
pub mod services;
pub mod specifications;
pub mod value_objects;

pub use entity::{Article, ArticleRevision, NewArticle};
pub use repository::ArticleRepository;
pub use value_objects::{
    ArticleBody, ArticleDescription, ArticleId, ArticleSlug, ArticleTitle, TagName, TagSet,
};
