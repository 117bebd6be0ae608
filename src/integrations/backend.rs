// src/integrations/backend.rs
//
// Backend ports consumed by the repository layer.
//
// RULES:
// - Adapters report failures as AppError, never panic
// - Adapters hold no domain logic (no defaults, no id overrides)
// - Handles are shared as Arc<dyn ...> and must be Send + Sync

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;

/// Identity of the signed-in user as reported by the auth service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthUser {
    pub uid: String,
    pub email: Option<String>,
}

/// A stored document as returned by a collection read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Store-assigned document id
    pub id: String,
    /// Decoded document body
    pub data: serde_json::Value,
}

impl RawRecord {
    pub fn new(id: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            id: id.into(),
            data,
        }
    }
}

/// Managed authentication service
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Creates an account and signs it in
    async fn create_account(&self, email: &str, password: &str) -> AppResult<()>;

    async fn sign_in(&self, email: &str, password: &str) -> AppResult<()>;

    /// Currently signed-in user, if any
    fn current_user(&self) -> Option<AuthUser>;
}

/// Managed document database
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Creates or replaces `collection/document_id`
    async fn set_document(
        &self,
        collection: &str,
        document_id: &str,
        data: serde_json::Value,
    ) -> AppResult<()>;

    /// One-shot read of every document in a collection, in store order
    async fn get_collection(&self, collection: &str) -> AppResult<Vec<RawRecord>>;
}
