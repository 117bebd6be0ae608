// src/domain/user_profile.rs

use serde::{Deserialize, Serialize};

/// Profile document stored at `users/{uid}` after account creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub uid: String,
    pub email: String,
    pub name: String,
}

impl UserProfile {
    pub fn new(uid: impl Into<String>, email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            email: email.into(),
            name: name.into(),
        }
    }

    /// Document body as written to the store
    pub fn to_document(&self) -> serde_json::Value {
        serde_json::json!({
            "uid": self.uid,
            "email": self.email,
            "name": self.name,
        })
    }
}
