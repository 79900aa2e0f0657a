// src/application/dto/profiles.rs
use serde::{Deserialize, Serialize};

/// Public view of a user relative to the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileView {
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    pub following: bool,
}
