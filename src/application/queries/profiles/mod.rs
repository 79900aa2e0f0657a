// src/application/queries/profiles/mod.rs
mod get_by_username;
mod service;

pub use service::ProfileQueryService;
