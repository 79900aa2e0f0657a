// src/application/commands/profiles/mod.rs
mod follow;
mod service;

pub use service::ProfileCommandService;
