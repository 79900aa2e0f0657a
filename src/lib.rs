//! Domain and query core of a social publishing backend: articles, comments,
//! favorites, follows and tags. Transport and token handling live in the host.
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
