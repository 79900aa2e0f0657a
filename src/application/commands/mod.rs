// src/application/commands/mod.rs
pub mod articles;
pub mod comments;
mod field_update;
pub mod profiles;
pub mod users;

pub use field_update::FieldUpdate;
