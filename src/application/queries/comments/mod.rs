// src/application/queries/comments/mod.rs
mod get_by_id;
mod list;
mod service;

pub use service::CommentQueryService;
