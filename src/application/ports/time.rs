// src/application/ports/time.rs
use chrono::{DateTime, Utc};

/// Source of the timestamps command services stamp on created and updated rows.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
