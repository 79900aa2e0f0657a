// src/application/ports/mod.rs
pub mod queries;
pub mod security;
pub mod time;
pub mod util;
