// src/application/commands/articles/mod.rs
mod create;
mod delete;
mod favorite;
mod service;
mod tags;
mod update;

pub use create::{CreateArticleCommand, CreateArticleCommandBuilder};
pub use service::ArticleCommandService;
pub use update::UpdateArticleCommand;
