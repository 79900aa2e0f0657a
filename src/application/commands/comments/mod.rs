// src/application/commands/comments/mod.rs
mod add;
mod delete;
mod service;

pub use add::AddCommentCommand;
pub use service::CommentCommandService;
